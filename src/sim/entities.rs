//! Projectiles, adversaries, pickups and particles
//!
//! Each kind owns its own state. The shared surface is the `Entity` trait:
//! a hitbox, a removal flag and a way to draw itself.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;
use crate::renderer::{DrawCommand, DrawList, Shape, colors};

/// Capabilities shared by every simulated object
pub trait Entity {
    /// Collision box
    fn bounds(&self) -> Rect;
    /// Marked for removal at the end of the current pass
    fn removed(&self) -> bool;
    /// Append draw commands; `now_ms` drives purely cosmetic animation
    fn render(&self, out: &mut DrawList, now_ms: f64);
}

/// A player shot travelling up the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Lateral drift from the firing angle
    pub vx: f32,
    pub removed: bool,
}

impl Projectile {
    /// Fire from muzzle point `(x, y)` at `angle` (0 = straight up)
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            pos: Vec2::new(x - 2.0, y),
            vx: angle * BULLET_DRIFT,
            removed: false,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y -= BULLET_SPEED;
        self.pos.x += self.vx;
        if self.pos.y < 0.0 {
            self.removed = true;
        }
    }
}

impl Entity for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BULLET_WIDTH, BULLET_HEIGHT)
    }

    fn removed(&self) -> bool {
        self.removed
    }

    fn render(&self, out: &mut DrawList, _now_ms: f64) {
        // Drawn slimmer than the hitbox
        let size = Vec2::new(4.0, BULLET_HEIGHT);
        out.push(DrawCommand::new(
            Shape::Rect,
            self.pos + size * 0.5,
            size,
            colors::BULLET,
        ));
    }
}

/// An enemy craft falling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adversary {
    pub pos: Vec2,
    /// Fixed at spawn; later difficulty changes don't apply
    pub speed: f32,
    pub hp: i32,
    pub color: [f32; 4],
    pub removed: bool,
}

impl Adversary {
    pub fn new(x: f32, difficulty: f32, rng: &mut impl Rng) -> Self {
        let jitter = rng.random::<f32>() * ENEMY_SPEED_JITTER;
        Self {
            pos: Vec2::new(x, ENEMY_SPAWN_Y),
            speed: (jitter + ENEMY_BASE_SPEED) * difficulty,
            hp: ENEMY_BASE_HP + difficulty.floor() as i32,
            color: colors::ENEMY,
            removed: false,
        }
    }

    pub fn advance(&mut self, field_height: f32) {
        self.pos.y += self.speed;
        if self.pos.y > field_height {
            self.removed = true;
        }
    }

    /// Apply one projectile hit, returns true when it was lethal
    pub fn take_hit(&mut self) -> bool {
        self.hp -= 1;
        if self.hp <= 0 {
            self.removed = true;
        }
        self.removed
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ENEMY_SIZE * 0.5)
    }
}

impl Entity for Adversary {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    fn removed(&self) -> bool {
        self.removed
    }

    fn render(&self, out: &mut DrawList, _now_ms: f64) {
        let center = self.center();
        out.push(DrawCommand::new(
            Shape::Rect,
            center,
            Vec2::splat(ENEMY_SIZE),
            self.color,
        ));
        // Darker core fades as the adversary weakens
        let core_alpha = 0.5 / self.hp.max(1) as f32;
        out.push(
            DrawCommand::new(
                Shape::Rect,
                center,
                Vec2::splat(ENEMY_SIZE - 10.0),
                colors::ENEMY_CORE,
            )
            .faded(core_alpha),
        );
    }
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Shield,
    Upgrade,
    Score,
}

impl PickupKind {
    /// Map a uniform roll in [0, 1) onto the 15/25/60 kind weighting
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.15 {
            PickupKind::Shield
        } else if roll < 0.40 {
            PickupKind::Upgrade
        } else {
            PickupKind::Score
        }
    }

    pub fn color(&self) -> [f32; 4] {
        match self {
            PickupKind::Shield => colors::SHIELD,
            PickupKind::Upgrade => colors::UPGRADE,
            PickupKind::Score => colors::SCORE,
        }
    }
}

/// Where a pickup entered the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PickupOrigin {
    /// Spawned by the director along the top edge
    Random,
    /// Dropped by a destroyed adversary at this position
    Dropped(Vec2),
}

/// A falling power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub kind: PickupKind,
    pub removed: bool,
}

impl Pickup {
    pub fn new(x: f32, origin: PickupOrigin, field_width: f32, rng: &mut impl Rng) -> Self {
        let pos = match origin {
            PickupOrigin::Random => Vec2::new(x, PICKUP_SPAWN_Y),
            PickupOrigin::Dropped(at) => {
                let max_x = (field_width - PICKUP_DROP_INSET).max(PICKUP_DROP_INSET);
                Vec2::new(
                    at.x.clamp(PICKUP_DROP_INSET, max_x),
                    at.y.max(PICKUP_DROP_INSET),
                )
            }
        };
        let kind = PickupKind::from_roll(rng.random::<f32>());
        Self {
            pos,
            kind,
            removed: false,
        }
    }

    pub fn advance(&mut self, field_height: f32) {
        self.pos.y += PICKUP_FALL_SPEED;
        self.pos.x += (self.pos.y * 0.05).sin() * 0.5;
        if self.pos.y > field_height {
            self.removed = true;
        }
    }
}

impl Entity for Pickup {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PICKUP_SIZE, PICKUP_SIZE)
    }

    fn removed(&self) -> bool {
        self.removed
    }

    fn render(&self, out: &mut DrawList, now_ms: f64) {
        let center = self.pos + Vec2::splat(PICKUP_SIZE * 0.5);
        let spin = ((now_ms / 150.0) % std::f64::consts::TAU) as f32;
        let color = self.kind.color();
        match self.kind {
            PickupKind::Upgrade => {
                let size = Vec2::splat(16.0);
                out.push(DrawCommand::new(Shape::Rect, center, size, color).rotated(spin));
                out.push(
                    DrawCommand::new(Shape::RectOutline { stroke: 1.0 }, center, size, colors::WHITE)
                        .rotated(spin),
                );
            }
            PickupKind::Shield => {
                out.push(DrawCommand::new(Shape::Circle, center, Vec2::splat(18.0), color));
            }
            PickupKind::Score => {
                // Diamond: square turned an extra eighth
                out.push(
                    DrawCommand::new(Shape::Rect, center, Vec2::splat(14.0), color)
                        .rotated(spin + std::f32::consts::FRAC_PI_4),
                );
            }
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [f32; 4],
    pub life: f32, // 0-1, decreases over time
    pub size: f32,
    pub removed: bool,
}

impl Particle {
    pub fn new(pos: Vec2, color: [f32; 4], rng: &mut impl Rng) -> Self {
        let size = rng.random::<f32>() * 3.0 + 2.0;
        let vx = rng.random::<f32>() * 2.0 * PARTICLE_MAX_SPEED - PARTICLE_MAX_SPEED;
        let vy = rng.random::<f32>() * 2.0 * PARTICLE_MAX_SPEED - PARTICLE_MAX_SPEED;
        Self {
            pos,
            vel: Vec2::new(vx, vy),
            color,
            life: 1.0,
            size,
            removed: false,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.life -= PARTICLE_DECAY;
        if self.life <= 0.0 {
            self.removed = true;
        }
    }
}

impl Entity for Particle {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x - self.size, self.pos.y - self.size, self.size * 2.0, self.size * 2.0)
    }

    fn removed(&self) -> bool {
        self.removed
    }

    fn render(&self, out: &mut DrawList, _now_ms: f64) {
        out.push(
            DrawCommand::new(Shape::Circle, self.pos, Vec2::splat(self.size * 2.0), self.color)
                .faded(self.life),
        );
    }
}
