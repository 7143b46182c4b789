//! Draw commands
//!
//! One command per primitive. Positions are shape centres in playfield
//! pixels; rotation is in radians around the centre.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Primitive kinds a host renderer must support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Filled box
    Rect,
    /// Box outline of the given stroke width
    RectOutline { stroke: f32 },
    /// Filled circle, diameter = size.x
    Circle,
    /// Circle outline of the given stroke width, diameter = size.x
    Ring { stroke: f32 },
    /// Arrowhead craft pointing up, with a notch in its tail
    Ship { notch: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub shape: Shape,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
    pub rotation: f32,
    pub alpha: f32,
}

impl DrawCommand {
    pub fn new(shape: Shape, pos: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            shape,
            pos,
            size,
            color,
            rotation: 0.0,
            alpha: 1.0,
        }
    }

    pub fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn faded(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Color with the command alpha folded in
    pub fn final_color(&self) -> [f32; 4] {
        let [r, g, b, a] = self.color;
        [r, g, b, a * self.alpha]
    }
}

/// Everything drawn in one tick, in painter's order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Whole-frame translation (screen shake)
    pub offset: Vec2,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
