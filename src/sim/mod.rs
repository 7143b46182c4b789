//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per host frame, driven by `tick`
//! - Seeded RNG only
//! - Stable iteration order within every pass
//! - No rendering backend or platform dependencies

pub mod entities;
pub mod events;
pub mod geometry;
pub mod player;
pub mod population;
pub mod spawn;
pub mod state;
pub mod tick;

pub use entities::{Adversary, Entity, Particle, Pickup, PickupKind, PickupOrigin, Projectile};
pub use events::GameEvent;
pub use geometry::{Rect, overlaps};
pub use player::Player;
pub use population::Population;
pub use spawn::{SpawnKind, spawn_threshold};
pub use state::{GameState, ScreenShake, Session, Star};
pub use tick::{Frame, InputMode, TickInput, tick};
