//! Axis-aligned hitboxes
//!
//! Every collision in the game is a box overlap test with a signed margin.
//! A positive margin makes a hit easier to register, a negative one stricter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Grow the box by `margin` on every side (shrink when negative)
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(2.0 * margin),
        }
    }
}

/// Check whether `a` intersects `b` grown by `margin` on all sides
///
/// Edges that merely touch do not count. Growing either operand by the same
/// margin gives the same answer, so callers pick the operand that reads best:
/// the enemy is the expanded one, the player the shrunk one.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect, margin: f32) -> bool {
    a.left() < b.right() + margin
        && a.right() > b.left() - margin
        && a.top() < b.bottom() + margin
        && a.bottom() > b.top() - margin
}
