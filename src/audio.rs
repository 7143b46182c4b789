//! Sound cues emitted by the simulation
//!
//! Synthesis lives with the host. The core only names the cue; a sink decides
//! how (or whether) to make it audible.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Player fires a volley
    Shoot,
    /// Adversary destroyed or player lost
    Explosion,
    /// Pickup collected
    Powerup,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::Explosion => "explosion",
            SoundEffect::Powerup => "powerup",
        }
    }
}

/// Fire-and-forget audio output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio sink for headless runs: logs cues and keeps a tally
#[derive(Debug, Default)]
pub struct LogAudio {
    pub shots: u64,
    pub explosions: u64,
    pub powerups: u64,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        match effect {
            SoundEffect::Shoot => self.shots += 1,
            SoundEffect::Explosion => self.explosions += 1,
            SoundEffect::Powerup => self.powerups += 1,
        }
        log::trace!("play {}", effect.as_str());
    }
}
