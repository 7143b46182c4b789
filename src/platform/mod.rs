//! Platform abstraction layer
//!
//! The simulation queues `GameEvent`s; this layer hands each one to the
//! host's audio and HUD collaborators.

use crate::audio::AudioSink;
use crate::hud::{HudSink, weapon_color, weapon_label};
use crate::sim::GameEvent;

/// Deliver drained events in the order they were queued
pub fn dispatch<A, H>(events: impl IntoIterator<Item = GameEvent>, audio: &mut A, hud: &mut H)
where
    A: AudioSink + ?Sized,
    H: HudSink + ?Sized,
{
    for event in events {
        match event {
            GameEvent::Sound(effect) => audio.play(effect),
            GameEvent::Hud {
                score,
                weapon_level,
            } => {
                hud.set_score(score);
                hud.set_weapon(&weapon_label(weapon_level), weapon_color(weapon_level));
            }
            GameEvent::ShowOverlay(overlay) => hud.show(overlay),
            GameEvent::HideOverlay(overlay) => hud.hide(overlay),
            GameEvent::GameOver { final_score } => hud.set_final_score(final_score),
        }
    }
}
