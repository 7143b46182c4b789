//! Game state and session lifecycle
//!
//! Everything a tick reads or writes lives in `GameState`. There are no
//! globals: hosts own one state per session and drive it through `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::{Effects, GameEvent};
use super::player::Player;
use super::population::Population;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::hud::Overlay;
use crate::settings::Settings;

/// Score, difficulty and run flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    /// Monotonic, starts at 1
    pub difficulty: f32,
    pub paused: bool,
    pub game_over: bool,
    pub spawn_timer: f32,
    /// Running ticks this session
    pub time_ticks: u64,
}

impl Session {
    fn fresh() -> Self {
        Self {
            score: 0,
            difficulty: DIFFICULTY_START,
            paused: false,
            game_over: false,
            spawn_timer: 0.0,
            time_ticks: 0,
        }
    }

    /// Before the first `start()` the session sits on the title screen
    fn title() -> Self {
        Self {
            game_over: true,
            ..Self::fresh()
        }
    }

    /// Whether ticks should run
    pub fn running(&self) -> bool {
        !self.paused && !self.game_over
    }
}

/// A background star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Star {
    fn random(field: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * field.x, rng.random::<f32>() * field.y),
            size: rng.random::<f32>() * 2.0,
            speed: rng.random::<f32>() * 0.5 + 0.1,
        }
    }
}

/// Short-lived frame offset after an impact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenShake {
    pub offset: Vec2,
    pub ticks_remaining: u32,
}

impl ScreenShake {
    /// Jolt by up to half the intensity along each axis
    pub fn trigger(&mut self, intensity: f32, rng: &mut impl Rng) {
        self.offset = Vec2::new(
            (rng.random::<f32>() - 0.5) * intensity,
            (rng.random::<f32>() - 0.5) * intensity,
        );
        self.ticks_remaining = SHAKE_DURATION_TICKS;
    }

    /// Run the timer down, snapping back once it expires
    pub fn decay(&mut self) {
        if self.ticks_remaining > 0 {
            self.ticks_remaining -= 1;
            if self.ticks_remaining == 0 {
                self.offset = Vec2::ZERO;
            }
        }
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield size in pixels
    pub field: Vec2,
    pub session: Session,
    pub player: Player,
    pub population: Population,
    pub stars: Vec<Star>,
    pub shake: ScreenShake,
    /// Particle budget from settings
    pub particle_cap: usize,
    pub shake_enabled: bool,
    pub starfield_enabled: bool,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a state on the title screen (call `start()` to play)
    pub fn new(width: f32, height: f32, seed: u64, settings: &Settings) -> Self {
        let field = Vec2::new(width, height);
        let mut state = Self {
            seed,
            field,
            session: Session::title(),
            player: Player::new(field),
            population: Population::default(),
            stars: Vec::new(),
            shake: ScreenShake::default(),
            particle_cap: settings.max_particles(),
            shake_enabled: settings.effective_screen_shake(),
            starfield_enabled: settings.starfield_enabled(),
            events: vec![GameEvent::ShowOverlay(Overlay::Start)],
            rng: Pcg32::seed_from_u64(seed),
        };
        state.init_stars();
        state
    }

    fn init_stars(&mut self) {
        let field = self.field;
        let rng = &mut self.rng;
        self.stars = (0..STAR_COUNT).map(|_| Star::random(field, &mut *rng)).collect();
    }

    /// Playfield changed size; the starfield is regenerated to fill it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Vec2::new(width, height);
        self.init_stars();
        log::debug!("Playfield resized to {}x{}", width, height);
    }

    /// Begin a fresh session, discarding everything from the last one
    pub fn start(&mut self) {
        self.session = Session::fresh();
        self.player.reset(self.field);
        self.population.clear();
        self.shake = ScreenShake::default();

        for overlay in [Overlay::Start, Overlay::GameOver, Overlay::Pause] {
            self.events.push(GameEvent::HideOverlay(overlay));
        }
        self.refresh_hud();
        log::info!("Session started (seed {})", self.seed);
    }

    /// Flip pause; returns true when the frame loop must be resumed
    pub fn toggle_pause(&mut self) -> bool {
        if self.session.game_over {
            return false;
        }
        self.session.paused = !self.session.paused;
        if self.session.paused {
            self.events.push(GameEvent::ShowOverlay(Overlay::Pause));
            log::info!("Paused");
            false
        } else {
            self.events.push(GameEvent::HideOverlay(Overlay::Pause));
            log::info!("Resumed");
            true
        }
    }

    /// End the session; repeated calls within a frame are ignored
    pub fn end_game(&mut self) {
        end_session(&mut self.session, &mut self.events);
    }

    /// Queue a HUD refresh with current score and weapon level
    pub fn refresh_hud(&mut self) {
        self.events.push(GameEvent::Hud {
            score: self.session.score,
            weapon_level: self.player.weapon_level,
        });
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Side-channel bundle for entity code
    pub fn effects(&mut self) -> Effects<'_> {
        Effects {
            particles: &mut self.population.particles,
            rng: &mut self.rng,
            events: &mut self.events,
            particle_cap: self.particle_cap,
        }
    }

    /// JSON snapshot of the visible world, for hosts that render out of process
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Mark the session over and tell the host
pub(crate) fn end_session(session: &mut Session, events: &mut Vec<GameEvent>) {
    if session.game_over {
        return;
    }
    session.game_over = true;
    events.push(GameEvent::Sound(SoundEffect::Explosion));
    events.push(GameEvent::GameOver {
        final_score: session.score,
    });
    events.push(GameEvent::ShowOverlay(Overlay::GameOver));
    log::info!(
        "Game over: score {} after {} ticks (difficulty {:.3})",
        session.score,
        session.time_ticks,
        session.difficulty
    );
}
