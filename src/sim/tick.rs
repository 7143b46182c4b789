//! Per-tick frame driver
//!
//! One call advances the whole game by a single frame and returns what to
//! draw. Nothing here reads a clock: `now_ms` only animates cosmetics.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entities::Entity;
use super::events::Effects;
use super::population::{self, Population};
use super::spawn::run_spawn_director;
use super::state::GameState;
use crate::consts::*;
use crate::renderer::{DrawCommand, DrawList, Shape, colors};

/// How the player is steering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Directional keys with inertia
    #[default]
    Keyboard,
    /// Craft follows the pointer
    Mouse,
}

/// Input snapshot for a single tick (read-only to the simulation)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    /// Slow, precise movement
    pub focus: bool,
    pub mode: InputMode,
    /// Pointer position in playfield pixels
    pub pointer: Vec2,
    pub pointer_down: bool,
}

impl TickInput {
    /// Raw directional intent, -1/0/1 per axis (y grows downward)
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| pos as i8 as f32 - neg as i8 as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    /// Shoot key, or pointer held while steering with the pointer
    pub fn wants_fire(&self) -> bool {
        self.shoot || (self.mode == InputMode::Mouse && self.pointer_down)
    }
}

/// Output of one tick
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub draw: DrawList,
    /// False once paused or over; the host stops its frame loop
    pub schedule_next: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> Frame {
    if !state.session.running() {
        return Frame::default();
    }

    state.session.time_ticks += 1;
    state.session.difficulty += DIFFICULTY_PER_TICK;
    state.shake.decay();

    let mut out = DrawList::new();

    // Translucent wash leaves short trails behind moving shapes
    out.push(DrawCommand::new(
        Shape::Rect,
        state.field * 0.5,
        state.field,
        colors::BACKGROUND_FADE,
    ));

    if state.starfield_enabled {
        scroll_stars(state, &mut out);
    }

    run_spawn_director(state);

    advance_player(state, input);
    state.player.render(&mut out, now_ms);

    population::projectile_pass(state, &mut out, now_ms);
    population::adversary_pass(state, &mut out, now_ms);
    population::pickup_pass(state, &mut out, now_ms);
    population::particle_pass(state, &mut out, now_ms);

    out.offset = state.shake.offset;

    Frame {
        draw: out,
        schedule_next: state.session.running(),
    }
}

/// Draw each star, then move it down faster as difficulty climbs
fn scroll_stars(state: &mut GameState, out: &mut DrawList) {
    let field = state.field;
    let pace = state.session.difficulty + 2.0;
    for star in &mut state.stars {
        out.push(DrawCommand::new(
            Shape::Rect,
            star.pos + Vec2::splat(star.size * 0.5),
            Vec2::splat(star.size),
            colors::STAR,
        ));
        star.pos.y += star.speed * pace;
        if star.pos.y > field.y {
            star.pos.y = 0.0;
            star.pos.x = state.rng.random::<f32>() * field.x;
        }
    }
}

fn advance_player(state: &mut GameState, input: &TickInput) {
    let GameState {
        field,
        player,
        population,
        particle_cap,
        events,
        rng,
        ..
    } = state;
    let Population {
        projectiles,
        particles,
        ..
    } = population;
    let mut fx = Effects {
        particles,
        rng,
        events,
        particle_cap: *particle_cap,
    };
    player.advance(input, *field, projectiles, &mut fx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{QualityPreset, Settings};
    use crate::sim::entities::Adversary;
    use crate::sim::events::GameEvent;

    fn playing_state(seed: u64, settings: &Settings) -> GameState {
        let mut state = GameState::new(480.0, 720.0, seed, settings);
        state.start();
        state.drain_events();
        state
    }

    /// Fire constantly while sweeping side to side
    fn weaving(t: u64) -> TickInput {
        let leftward = (t / 90) % 2 == 0;
        TickInput {
            shoot: true,
            left: leftward,
            right: !leftward,
            ..Default::default()
        }
    }

    #[test]
    fn test_direction() {
        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(-1.0, -1.0));
        assert_eq!(TickInput::default().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_title_screen_does_not_tick() {
        let mut state = GameState::new(480.0, 720.0, 1, &Settings::default());
        let frame = tick(&mut state, &TickInput::default(), 0.0);
        assert!(!frame.schedule_next);
        assert!(frame.draw.is_empty());
        assert_eq!(state.session.time_ticks, 0);
    }

    #[test]
    fn test_running_tick_schedules_next() {
        let mut state = playing_state(1, &Settings::default());
        let frame = tick(&mut state, &TickInput::default(), 16.0);
        assert!(frame.schedule_next);
        // Background, 80 stars, player
        assert_eq!(frame.draw.len(), 2 + STAR_COUNT);
    }

    #[test]
    fn test_low_quality_skips_stars() {
        let settings = Settings::from_preset(QualityPreset::Low);
        let mut state = playing_state(1, &settings);
        let frame = tick(&mut state, &TickInput::default(), 16.0);
        assert_eq!(frame.draw.len(), 2);
    }

    #[test]
    fn test_difficulty_ramps_per_running_tick() {
        let mut state = playing_state(2, &Settings::default());
        for t in 0..100 {
            tick(&mut state, &TickInput::default(), t as f64 * 16.0);
        }
        assert_eq!(state.session.time_ticks, 100);
        let expected = DIFFICULTY_START + 100.0 * DIFFICULTY_PER_TICK;
        assert!((state.session.difficulty - expected).abs() < 1e-4);
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut state = playing_state(3, &Settings::default());
        for t in 0..30 {
            tick(&mut state, &weaving(t), 0.0);
        }
        state.toggle_pause();
        let before = state.snapshot_json().unwrap();

        let frame = tick(&mut state, &weaving(30), 0.0);
        assert!(!frame.schedule_next);
        assert_eq!(state.snapshot_json().unwrap(), before);

        assert!(state.toggle_pause());
        assert!(tick(&mut state, &weaving(31), 0.0).schedule_next);
    }

    #[test]
    fn test_contact_ends_session_and_stays_over() {
        let mut state = playing_state(4, &Settings::default());
        let mut adversary = Adversary::new(0.0, 1.0, &mut state.rng);
        adversary.pos = state.player.pos;
        adversary.speed = 0.0;
        state.population.adversaries.push(adversary);

        let frame = tick(&mut state, &TickInput::default(), 0.0);
        assert!(!frame.schedule_next);
        assert!(state.session.game_over);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::GameOver { final_score: 0 }));

        let before = state.snapshot_json().unwrap();
        for _ in 0..10 {
            let frame = tick(&mut state, &weaving(0), 0.0);
            assert!(!frame.schedule_next);
        }
        assert_eq!(state.snapshot_json().unwrap(), before);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_shake_offsets_frame() {
        let mut state = playing_state(5, &Settings::default());
        state.shake.trigger(SHIELD_BREAK_SHAKE, &mut state.rng);
        let offset = state.shake.offset;

        let frame = tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(frame.draw.offset, offset);

        for _ in 0..SHAKE_DURATION_TICKS {
            tick(&mut state, &TickInput::default(), 0.0);
        }
        assert_eq!(state.shake.offset, Vec2::ZERO);
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = |seed: u64| {
            let mut state = playing_state(seed, &Settings::default());
            let mut events = Vec::new();
            for t in 0..3_000 {
                if !tick(&mut state, &weaving(t), t as f64 * 16.0).schedule_next {
                    break;
                }
                events.extend(state.drain_events());
            }
            (state.snapshot_json().unwrap(), events)
        };

        let (a, events_a) = run(77);
        let (b, events_b) = run(77);
        assert_eq!(a, b);
        assert_eq!(events_a, events_b);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut state = playing_state(8, &Settings::default());
        let mut last = 0;
        for t in 0..3_000 {
            let running = tick(&mut state, &weaving(t), 0.0).schedule_next;
            assert!(state.session.score >= last);
            last = state.session.score;
            assert!(state.player.weapon_level >= 1 && state.player.weapon_level <= MAX_WEAPON_LEVEL);
            assert!(state.population.adversaries.iter().all(|a| a.hp > 0));
            assert!(state.population.particles.len() <= state.particle_cap);
            if !running {
                break;
            }
        }
    }
}
