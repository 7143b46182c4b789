//! Outbound effects of a tick
//!
//! The simulation talks to audio and the HUD only by queueing events.
//! `Effects` bundles the things an entity may touch while a pass runs.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::Particle;
use crate::audio::SoundEffect;
use crate::hud::Overlay;

/// Something the host must react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundEffect),
    /// Score or weapon level changed
    Hud { score: u64, weapon_level: u8 },
    ShowOverlay(Overlay),
    HideOverlay(Overlay),
    GameOver { final_score: u64 },
}

/// Mutable side channels available during a pass
pub struct Effects<'a> {
    pub particles: &'a mut Vec<Particle>,
    pub rng: &'a mut Pcg32,
    pub events: &'a mut Vec<GameEvent>,
    /// Particles beyond this count are dropped
    pub particle_cap: usize,
}

impl Effects<'_> {
    pub fn sound(&mut self, effect: SoundEffect) {
        self.events.push(GameEvent::Sound(effect));
    }

    /// Uniform sample in [0, 1)
    pub fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Spray `count` particles from `pos`
    pub fn burst(&mut self, pos: Vec2, count: usize, color: [f32; 4]) {
        let room = self.particle_cap.saturating_sub(self.particles.len());
        for _ in 0..count.min(room) {
            let particle = Particle::new(pos, color, &mut *self.rng);
            self.particles.push(particle);
        }
    }
}
