//! The player craft
//!
//! Movement has two modes. Pointer mode pins the craft under the cursor with
//! no inertia. Directional mode normalises the held directions so diagonals
//! are not faster, and lets the craft coast to a stop under friction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::{Entity, Projectile};
use super::events::Effects;
use super::geometry::Rect;
use super::tick::{InputMode, TickInput};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::renderer::{DrawCommand, DrawList, Shape, colors};

/// Side-shot offset and vertical drop for weapon level 2
const SIDE_GUN_OFFSET: f32 = 12.0;
const SIDE_GUN_DROP: f32 = 5.0;

/// Firing angles added at each weapon level (cumulative)
const LEVEL3_ANGLE: f32 = 0.3;
const LEVEL4_ANGLE: f32 = 0.6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1..=MAX_WEAPON_LEVEL
    pub weapon_level: u8,
    pub shielded: bool,
    pub shield_ticks: i32,
    pub fire_cooldown: i32,
    /// Keyboard focus held this tick (draws the core marker)
    pub focused: bool,
}

impl Player {
    pub fn new(field: Vec2) -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            weapon_level: 1,
            shielded: false,
            shield_ticks: 0,
            fire_cooldown: 0,
            focused: false,
        };
        player.reset(field);
        player
    }

    /// Centre horizontally near the bottom and drop all upgrades
    pub fn reset(&mut self, field: Vec2) {
        self.pos = Vec2::new(
            field.x / 2.0 - PLAYER_SIZE / 2.0,
            field.y - PLAYER_START_OFFSET,
        );
        self.vel = Vec2::ZERO;
        self.weapon_level = 1;
        self.shielded = false;
        self.shield_ticks = 0;
        self.fire_cooldown = 0;
        self.focused = false;
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_SIZE * 0.5)
    }

    /// Muzzle point at the nose of the craft
    pub fn nose(&self) -> Vec2 {
        Vec2::new(self.pos.x + PLAYER_SIZE / 2.0, self.pos.y)
    }

    /// Advance one tick: move, clamp, fire, and run down timers
    pub fn advance(
        &mut self,
        input: &TickInput,
        field: Vec2,
        projectiles: &mut Vec<Projectile>,
        fx: &mut Effects,
    ) {
        match input.mode {
            InputMode::Mouse => {
                self.pos = input.pointer - Vec2::splat(PLAYER_SIZE / 2.0);
                self.vel = Vec2::ZERO;
                self.focused = false;
            }
            InputMode::Keyboard => {
                self.focused = input.focus;
                self.steer(input);
                self.pos += self.vel;
            }
        }

        self.pos.x = self.pos.x.min(field.x - PLAYER_SIZE).max(0.0);
        self.pos.y = self.pos.y.min(field.y - PLAYER_SIZE).max(0.0);

        if input.wants_fire() && self.fire_cooldown <= 0 {
            self.fire(projectiles, fx);
            self.fire_cooldown = FIRE_COOLDOWN_TICKS;
        }
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }

        if self.shielded {
            self.shield_ticks -= 1;
            if self.shield_ticks <= 0 {
                self.shielded = false;
            }
        }
    }

    /// Update velocity from directional intent
    pub fn steer(&mut self, input: &TickInput) {
        let max_speed = if input.focus {
            PLAYER_FOCUS_SPEED
        } else {
            PLAYER_SPEED
        };

        let dir = input.direction();
        if dir != Vec2::ZERO {
            self.vel = dir.normalize() * max_speed;
        } else {
            self.vel *= PLAYER_FRICTION;
        }

        if self.vel.x.abs() < PLAYER_VELOCITY_SNAP {
            self.vel.x = 0.0;
        }
        if self.vel.y.abs() < PLAYER_VELOCITY_SNAP {
            self.vel.y = 0.0;
        }
    }

    /// Projectiles for one volley at the current weapon level
    pub fn volley(&self) -> Vec<Projectile> {
        let muzzle = self.nose();
        let (cx, cy) = (muzzle.x, muzzle.y);

        let mut shots = vec![Projectile::new(cx, cy, 0.0)];
        if self.weapon_level >= 2 {
            shots.push(Projectile::new(cx - SIDE_GUN_OFFSET, cy + SIDE_GUN_DROP, 0.0));
            shots.push(Projectile::new(cx + SIDE_GUN_OFFSET, cy + SIDE_GUN_DROP, 0.0));
        }
        if self.weapon_level >= 3 {
            shots.push(Projectile::new(cx, cy, -LEVEL3_ANGLE));
            shots.push(Projectile::new(cx, cy, LEVEL3_ANGLE));
        }
        if self.weapon_level >= 4 {
            shots.push(Projectile::new(cx, cy, -LEVEL4_ANGLE));
            shots.push(Projectile::new(cx, cy, LEVEL4_ANGLE));
        }
        shots
    }

    pub fn fire(&self, projectiles: &mut Vec<Projectile>, fx: &mut Effects) {
        fx.sound(SoundEffect::Shoot);
        projectiles.extend(self.volley());
    }

    /// Raise the weapon level, or pay out bonus score once maxed
    pub fn upgrade_weapon(&mut self, score: &mut u64, fx: &mut Effects) {
        if self.weapon_level < MAX_WEAPON_LEVEL {
            self.weapon_level += 1;
            fx.burst(self.nose(), 15, colors::UPGRADE);
            log::debug!("Weapon upgraded to level {}", self.weapon_level);
        } else {
            *score += SCORE_MAXED_UPGRADE;
        }
    }

    pub fn activate_shield(&mut self) {
        self.shielded = true;
        self.shield_ticks = SHIELD_DURATION_TICKS;
    }

    pub fn deactivate_shield(&mut self) {
        self.shielded = false;
    }
}

impl Entity for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    fn removed(&self) -> bool {
        false
    }

    fn render(&self, out: &mut DrawList, now_ms: f64) {
        let center = self.center();
        if self.focused {
            out.push(DrawCommand::new(Shape::Circle, center, Vec2::splat(8.0), colors::FOCUS_DOT));
        }
        out.push(DrawCommand::new(
            Shape::Ship { notch: 8.0 },
            center,
            Vec2::splat(PLAYER_SIZE),
            colors::PLAYER,
        ));
        if self.shielded {
            let pulse = (now_ms / 100.0).sin().abs() as f32;
            out.push(
                DrawCommand::new(Shape::Ring { stroke: 2.0 }, center, Vec2::splat(64.0), colors::WHITE)
                    .faded(pulse),
            );
        }
    }
}
