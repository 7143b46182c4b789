//! Dynamic entity collections and the per-tick passes over them
//!
//! Pass order is fixed: projectiles, adversaries (with projectile and player
//! collisions), pickups (with player collision), particles.
//!
//! Removal is mark-then-compact. A pass visits live elements, sets `removed`
//! on anything that dies, and compacts with one `retain` when it finishes.
//! Marked entities are skipped by every later check in the same tick, so
//! nothing is advanced, drawn or hit-tested after it dies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::{Adversary, Entity, Particle, Pickup, PickupKind, PickupOrigin, Projectile};
use super::events::{Effects, GameEvent};
use super::geometry::overlaps;
use super::player::Player;
use super::state::{GameState, Session, end_session};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::renderer::{DrawList, colors};

/// Every dynamic entity collection (the player is held separately)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    pub projectiles: Vec<Projectile>,
    pub adversaries: Vec<Adversary>,
    pub pickups: Vec<Pickup>,
    pub particles: Vec<Particle>,
}

impl Population {
    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.adversaries.clear();
        self.pickups.clear();
        self.particles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
            && self.adversaries.is_empty()
            && self.pickups.is_empty()
            && self.particles.is_empty()
    }
}

/// Move every projectile, cull the ones past the top edge, draw the rest
pub fn projectile_pass(state: &mut GameState, out: &mut DrawList, now_ms: f64) {
    let projectiles = &mut state.population.projectiles;
    for projectile in projectiles.iter_mut().rev() {
        if projectile.removed {
            continue;
        }
        projectile.advance();
        if !projectile.removed {
            projectile.render(out, now_ms);
        }
    }
    projectiles.retain(|p| !p.removed);
}

/// Move adversaries and resolve their hits against projectiles and the player
pub fn adversary_pass(state: &mut GameState, out: &mut DrawList, now_ms: f64) {
    let GameState {
        field,
        session,
        player,
        population,
        shake,
        shake_enabled,
        particle_cap,
        events,
        rng,
        ..
    } = state;
    let Population {
        projectiles,
        adversaries,
        pickups,
        particles,
    } = population;
    let mut fx = Effects {
        particles,
        rng,
        events,
        particle_cap: *particle_cap,
    };
    let field = *field;

    for adversary in adversaries.iter_mut().rev() {
        if adversary.removed {
            continue;
        }
        adversary.advance(field.y);
        if adversary.removed {
            continue;
        }

        if let Some(index) = first_hit(adversary, projectiles) {
            let impact = projectiles[index].pos;
            projectiles[index].removed = true;
            resolve_hit(adversary, impact, session, player, pickups, field, &mut fx);
        }

        if !adversary.removed
            && overlaps(&adversary.bounds(), &player.bounds(), -HITBOX_SHRINK_PLAYER)
        {
            if player.shielded {
                adversary.removed = true;
                player.deactivate_shield();
                fx.burst(adversary.pos, 10, colors::WHITE);
                if *shake_enabled {
                    shake.trigger(SHIELD_BREAK_SHAKE, &mut *fx.rng);
                }
                log::debug!("Shield absorbed a hit");
            } else {
                fx.burst(player.pos, 40, colors::PLAYER);
                end_session(session, fx.events);
            }
        }

        if !adversary.removed {
            adversary.render(out, now_ms);
        }
    }

    adversaries.retain(|a| !a.removed);
    projectiles.retain(|p| !p.removed);
}

/// Index of the first live projectile touching the adversary's widened hitbox
fn first_hit(adversary: &Adversary, projectiles: &[Projectile]) -> Option<usize> {
    let target = adversary.bounds();
    projectiles
        .iter()
        .position(|p| !p.removed && overlaps(&p.bounds(), &target, HITBOX_EXPAND_ENEMY))
}

/// Apply one projectile hit; hp is checked right after the decrement
fn resolve_hit(
    adversary: &mut Adversary,
    impact: Vec2,
    session: &mut Session,
    player: &Player,
    pickups: &mut Vec<Pickup>,
    field: Vec2,
    fx: &mut Effects,
) {
    if !adversary.take_hit() {
        fx.burst(impact, 2, colors::WHITE);
        return;
    }

    fx.burst(adversary.center(), 8, adversary.color);
    fx.sound(SoundEffect::Explosion);
    award(session, SCORE_KILL, player.weapon_level, fx);
    log::debug!("Adversary destroyed at ({:.0}, {:.0})", adversary.pos.x, adversary.pos.y);

    if fx.roll() < PICKUP_DROP_CHANCE {
        let drop = Pickup::new(
            adversary.pos.x,
            PickupOrigin::Dropped(adversary.pos),
            field.x,
            &mut *fx.rng,
        );
        log::debug!("Dropped {:?} pickup", drop.kind);
        pickups.push(drop);
    }
}

/// Add points and refresh the HUD; the score is frozen once the session ends
fn award(session: &mut Session, points: u64, weapon_level: u8, fx: &mut Effects) {
    if session.game_over {
        return;
    }
    session.score += points;
    fx.events.push(GameEvent::Hud {
        score: session.score,
        weapon_level,
    });
}

/// Move pickups and hand them to the player on contact
pub fn pickup_pass(state: &mut GameState, out: &mut DrawList, now_ms: f64) {
    let GameState {
        field,
        session,
        player,
        population,
        particle_cap,
        events,
        rng,
        ..
    } = state;
    let Population {
        pickups, particles, ..
    } = population;
    let mut fx = Effects {
        particles,
        rng,
        events,
        particle_cap: *particle_cap,
    };

    for pickup in pickups.iter_mut().rev() {
        if pickup.removed {
            continue;
        }
        pickup.advance(field.y);
        if pickup.removed {
            continue;
        }

        // A destroyed craft collects nothing
        if !session.game_over
            && overlaps(&player.bounds(), &pickup.bounds(), HITBOX_EXPAND_PICKUP)
        {
            apply_pickup(pickup.kind, player, &mut session.score, &mut fx);
            pickup.removed = true;
            fx.burst(pickup.pos, 6, pickup.kind.color());
            award(session, SCORE_PICKUP, player.weapon_level, &mut fx);
            fx.sound(SoundEffect::Powerup);
        } else {
            pickup.render(out, now_ms);
        }
    }

    pickups.retain(|p| !p.removed);
}

/// Kind-specific pickup effect (the flat pickup bonus is applied by the caller)
pub fn apply_pickup(kind: PickupKind, player: &mut Player, score: &mut u64, fx: &mut Effects) {
    match kind {
        PickupKind::Upgrade => player.upgrade_weapon(score, fx),
        PickupKind::Shield => player.activate_shield(),
        PickupKind::Score => {}
    }
}

/// Age particles, drop the spent ones, draw the rest
pub fn particle_pass(state: &mut GameState, out: &mut DrawList, now_ms: f64) {
    let particles = &mut state.population.particles;
    for particle in particles.iter_mut().rev() {
        if particle.removed {
            continue;
        }
        particle.advance();
        if !particle.removed {
            particle.render(out, now_ms);
        }
    }
    particles.retain(|p| !p.removed);
}
