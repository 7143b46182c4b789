//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Size of one vertex in a GPU buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const FOCUS_DOT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const ENEMY: [f32; 4] = [1.0, 0.0, 0.2, 1.0];
    pub const ENEMY_CORE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SHIELD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const UPGRADE: [f32; 4] = [0.867, 0.0, 1.0, 1.0];
    pub const SCORE: [f32; 4] = [0.0, 0.667, 0.667, 1.0];
    /// Translucent so the previous frame lingers as a trail
    pub const BACKGROUND_FADE: [f32; 4] = [0.02, 0.02, 0.02, 0.5];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
