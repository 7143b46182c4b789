//! Neon Apex entry point
//!
//! Headless runner: plays one seeded session on autopilot, routing events to
//! logging sinks, and reports the outcome.
//!
//! Usage: `neon-apex [settings.json] [seed] [low|medium|high]`

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use neon_apex::Settings;
use neon_apex::audio::LogAudio;
use neon_apex::consts::*;
use neon_apex::hud::LogHud;
use neon_apex::platform::dispatch;
use neon_apex::renderer::tessellate;
use neon_apex::sim::{Entity, GameState, TickInput, tick};

const FIELD_WIDTH: f32 = 480.0;
const FIELD_HEIGHT: f32 = 720.0;
/// Give up after five minutes of play
const MAX_TICKS: u64 = TICKS_PER_SECOND as u64 * 60 * 5;

fn main() {
    env_logger::init();
    log::info!("Neon Apex (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = args
        .next()
        .and_then(|s| match s.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                log::warn!("Ignoring seed {:?}: {}", s, err);
                None
            }
        })
        .unwrap_or_else(clock_seed);
    if let Some(quality) = args.next() {
        settings.apply_preset_named(&quality);
    }
    log::info!(
        "Quality {}, particle cap {}",
        settings.quality.as_str(),
        settings.max_particles()
    );

    let mut state = GameState::new(FIELD_WIDTH, FIELD_HEIGHT, seed, &settings);
    let mut audio = LogAudio::default();
    let mut hud = LogHud::default();
    dispatch(state.drain_events(), &mut audio, &mut hud);

    state.start();
    log::info!("Game initialized with seed: {}", seed);

    let frame_ms = 1000.0 / TICKS_PER_SECOND as f64;
    let mut vertices = 0usize;
    let mut ticks = 0u64;
    while ticks < MAX_TICKS {
        let input = autopilot(&state);
        let frame = tick(&mut state, &input, ticks as f64 * frame_ms);
        vertices += tessellate(&frame.draw).len();
        dispatch(state.drain_events(), &mut audio, &mut hud);
        ticks += 1;
        if !frame.schedule_next {
            break;
        }
    }

    if !state.session.game_over {
        log::info!("Tick limit reached, ending session");
        state.end_game();
        dispatch(state.drain_events(), &mut audio, &mut hud);
    }

    log::info!(
        "Run over after {} ticks: score {}, weapon {}, difficulty {:.3}",
        ticks,
        hud.final_score.unwrap_or(hud.score),
        hud.weapon,
        state.session.difficulty
    );
    log::info!(
        "{} volleys, {} explosions, {} pickups, {} vertices tessellated",
        audio.shots,
        audio.explosions,
        audio.powerups,
        vertices
    );
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Simple AI: dodge anything close overhead, grab pickups, line up on the
/// lowest adversary, and keep firing
fn autopilot(state: &GameState) -> TickInput {
    let me = state.player.center();
    let population = &state.population;

    let threat = population
        .adversaries
        .iter()
        .map(|a| a.bounds().center())
        .filter(|c| c.y < me.y && me.y - c.y < 140.0 && (c.x - me.x).abs() < 45.0)
        .max_by(|a, b| a.y.total_cmp(&b.y));

    let target = if let Some(threat) = threat {
        // Step out from under it, toward the roomier side
        let away = if threat.x > me.x { -1.0 } else { 1.0 };
        let side = if (me.x < 60.0 && away < 0.0) || (me.x > state.field.x - 60.0 && away > 0.0) {
            -away
        } else {
            away
        };
        Some(Vec2::new(me.x + side * 80.0, me.y))
    } else {
        population
            .pickups
            .iter()
            .map(|p| p.bounds().center())
            .filter(|c| c.y < me.y)
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .or_else(|| {
                population
                    .adversaries
                    .iter()
                    .map(|a| a.bounds().center())
                    .max_by(|a, b| a.y.total_cmp(&b.y))
            })
    };

    let mut input = TickInput {
        shoot: true,
        ..Default::default()
    };
    if let Some(target) = target {
        let dx = target.x - me.x;
        if dx.abs() > PLAYER_SPEED {
            input.left = dx < 0.0;
            input.right = dx > 0.0;
        }
    }
    input
}
