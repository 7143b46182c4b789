//! Neon Apex - A vertical neon arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `renderer`: Draw commands and vertex tessellation
//! - `platform`: Routing of simulation events to host collaborators
//! - `audio`: Sound cue vocabulary
//! - `hud`: Score/weapon display helpers and overlays
//! - `settings`: Player-facing preferences

pub mod audio;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Nominal display refresh rate the tick constants are tuned for
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Player craft
    pub const PLAYER_SIZE: f32 = 36.0;
    pub const PLAYER_SPEED: f32 = 2.0;
    pub const PLAYER_FOCUS_SPEED: f32 = 2.5;
    pub const PLAYER_FRICTION: f32 = 0.85;
    /// Velocity components below this snap to zero
    pub const PLAYER_VELOCITY_SNAP: f32 = 0.1;
    /// Player spawns this far above the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 100.0;
    pub const FIRE_COOLDOWN_TICKS: i32 = 10;
    pub const SHIELD_DURATION_TICKS: i32 = 300;
    pub const MAX_WEAPON_LEVEL: u8 = 4;

    /// Projectiles
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_WIDTH: f32 = 6.0;
    pub const BULLET_HEIGHT: f32 = 14.0;
    /// Lateral drift per unit of firing angle
    pub const BULLET_DRIFT: f32 = 4.0;

    /// Adversaries
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_BASE_SPEED: f32 = 1.5;
    pub const ENEMY_SPEED_JITTER: f32 = 0.5;
    pub const ENEMY_BASE_HP: i32 = 2;
    pub const ENEMY_SPAWN_Y: f32 = -40.0;

    /// Pickups
    pub const PICKUP_SIZE: f32 = 18.0;
    pub const PICKUP_FALL_SPEED: f32 = 1.5;
    pub const PICKUP_SPAWN_Y: f32 = -30.0;
    /// Dropped pickups stay this far inside the playfield
    pub const PICKUP_DROP_INSET: f32 = 20.0;
    pub const PICKUP_DROP_CHANCE: f32 = 0.2;

    /// Particles
    pub const PARTICLE_DECAY: f32 = 0.04;
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;

    /// Hitbox margins (positive = easier to register, negative = stricter)
    pub const HITBOX_EXPAND_ENEMY: f32 = 10.0;
    pub const HITBOX_SHRINK_PLAYER: f32 = 8.0;
    pub const HITBOX_EXPAND_PICKUP: f32 = 5.0;

    /// Scoring
    pub const SCORE_KILL: u64 = 10;
    pub const SCORE_PICKUP: u64 = 5;
    pub const SCORE_MAXED_UPGRADE: u64 = 100;

    /// Difficulty ramp and spawn pacing
    pub const DIFFICULTY_START: f32 = 1.0;
    pub const DIFFICULTY_PER_TICK: f32 = 0.0003;
    pub const SPAWN_RATE: f32 = 60.0;
    pub const SPAWN_RATE_MIN: f32 = 25.0;
    pub const SPAWN_RATE_PER_DIFFICULTY: f32 = 2.0;
    pub const SPAWN_ENEMY_CHANCE: f32 = 0.9;

    /// Starfield
    pub const STAR_COUNT: usize = 80;

    /// Screen shake
    pub const SHAKE_DURATION_TICKS: u32 = 3;
    pub const SHIELD_BREAK_SHAKE: f32 = 5.0;
}
