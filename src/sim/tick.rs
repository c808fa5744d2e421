//! Fixed timestep simulation tick
//!
//! Input, then every entity in registry order, then the win check.

use super::asteroid;
use super::bullet;
use super::entity::{EntityId, EntityTag};
use super::scene::Scene;
use super::ship;
use super::state::{GameEvent, GameState, SoundCue};

/// Command keys held during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still playing, schedule another tick
    Continue,
    /// Nothing simulated: not playing, or paused
    Idle,
    /// Play ended this tick; stop scheduling and show the scene's overlay
    Transition(Scene),
}

/// Advance the run by one tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    if state.scene != Scene::Playing || state.paused {
        return TickOutcome::Idle;
    }

    state.time_ticks += 1;
    state.clock_ms += f64::from(dt) * 1000.0;

    apply_input(state, input);

    // New spawns get ids past this snapshot and wait for the next tick;
    // despawned ids simply fail to resolve.
    for id in state.registry.ids() {
        update_entity(state, id);
        if state.scene != Scene::Playing {
            return TickOutcome::Transition(state.scene);
        }
    }

    if state.is_win_condition_met() {
        let level = state.current_level;
        log::info!("Level {} cleared with score {}", level, state.score.value());
        state.push_event(GameEvent::LevelCleared { level });
        state.stop_thruster();
        state.transition(Scene::LevelWon);
        return TickOutcome::Transition(Scene::LevelWon);
    }

    TickOutcome::Continue
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    let Some(ship_id) = state.registry.ship_id() else {
        return;
    };

    if let Some(entity) = state.registry.get_mut(ship_id) {
        if let super::entity::EntityKind::Ship(ship) = &entity.kind {
            let turn = ship.rotation_speed;
            if input.rotate_left {
                entity.body.rotate(turn);
            }
            if input.rotate_right {
                entity.body.rotate(-turn);
            }
            if input.thrust {
                ship.accelerate(&mut entity.body, None);
            }
        }
    }

    if input.thrust && !state.thrusting {
        state.thrusting = true;
        state.push_event(GameEvent::Sound(SoundCue::ThrusterStart));
    } else if !input.thrust {
        state.stop_thruster();
    }

    if input.fire {
        ship::fire(state, ship_id);
    }
}

/// Dispatch one entity's per-tick behavior by tag
fn update_entity(state: &mut GameState, id: EntityId) {
    let Some(tag) = state.registry.get(id).map(|e| e.tag()) else {
        return;
    };
    match tag {
        EntityTag::Ship => ship::update(state, id),
        EntityTag::Bullet => bullet::update(state, id),
        EntityTag::Asteroid => asteroid::update(state, id),
    }
}
