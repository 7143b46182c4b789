//! HUD values and overlay screens
//!
//! The DOM (or whatever the host draws text with) is not ours. This module
//! derives the displayed strings/colours and defines the sink the host fills.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_WEAPON_LEVEL;
use crate::renderer::colors;

/// Full-screen overlays the host shows and hides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overlay {
    Start,
    Pause,
    GameOver,
}

/// Weapon level label ("LV.2", or "MAX" at the cap)
pub fn weapon_label(level: u8) -> String {
    if level >= MAX_WEAPON_LEVEL {
        "MAX".to_string()
    } else {
        format!("LV.{}", level)
    }
}

/// Weapon level label colour: white at 1, purple at max, cyan between
pub fn weapon_color(level: u8) -> [f32; 4] {
    match level {
        1 => colors::WHITE,
        l if l >= MAX_WEAPON_LEVEL => colors::UPGRADE,
        _ => colors::PLAYER,
    }
}

/// Receiver for HUD updates
pub trait HudSink {
    fn set_score(&mut self, score: u64);
    fn set_weapon(&mut self, label: &str, color: [f32; 4]);
    fn show(&mut self, overlay: Overlay);
    fn hide(&mut self, overlay: Overlay);
    fn set_final_score(&mut self, score: u64);
}

/// HUD sink for headless runs: mirrors the visible state and logs changes
#[derive(Debug, Default)]
pub struct LogHud {
    pub score: u64,
    pub weapon: String,
    pub final_score: Option<u64>,
    pub visible: Vec<Overlay>,
}

impl HudSink for LogHud {
    fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    fn set_weapon(&mut self, label: &str, _color: [f32; 4]) {
        if self.weapon != label {
            log::info!("Weapon {}", label);
            self.weapon = label.to_string();
        }
    }

    fn show(&mut self, overlay: Overlay) {
        if !self.visible.contains(&overlay) {
            log::debug!("Show {:?} overlay", overlay);
            self.visible.push(overlay);
        }
    }

    fn hide(&mut self, overlay: Overlay) {
        self.visible.retain(|o| *o != overlay);
    }

    fn set_final_score(&mut self, score: u64) {
        log::info!("Final score: {}", score);
        self.final_score = Some(score);
    }
}
