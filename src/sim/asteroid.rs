//! Asteroids: procedural outlines, self-rotation, split-on-destroy

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityId, EntityKind};
use super::state::GameState;
use crate::consts::*;

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Large,
    Medium,
    Small,
}

impl Tier {
    /// Classify by the scalar radius against the nominal tier constants.
    ///
    /// The radius is the last sampled outline radius, so it sits below the
    /// nominal value of its own tier and the thresholds are one tier down.
    pub fn classify(radius: f32) -> Self {
        if radius >= ASTEROID_MEDIUM_RADIUS {
            Tier::Large
        } else if radius >= ASTEROID_SMALL_RADIUS {
            Tier::Medium
        } else {
            Tier::Small
        }
    }

    pub fn nominal_radius(self) -> f32 {
        match self {
            Tier::Large => ASTEROID_LARGE_RADIUS,
            Tier::Medium => ASTEROID_MEDIUM_RADIUS,
            Tier::Small => ASTEROID_SMALL_RADIUS,
        }
    }

    pub fn max_velocity(self) -> f32 {
        match self {
            Tier::Large => ASTEROID_LARGE_MAX_VELOCITY,
            Tier::Medium => ASTEROID_MEDIUM_MAX_VELOCITY,
            Tier::Small => ASTEROID_SMALL_MAX_VELOCITY,
        }
    }

    pub fn points(self) -> u64 {
        match self {
            Tier::Large => SCORE_LARGE,
            Tier::Medium => SCORE_MEDIUM,
            Tier::Small => SCORE_SMALL,
        }
    }

    /// Tier of the fragments, or None if this tier just vanishes
    pub fn split(self) -> Option<Tier> {
        match self {
            Tier::Large => Some(Tier::Medium),
            Tier::Medium => Some(Tier::Small),
            Tier::Small => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    /// Degrees per tick, fixed at construction
    pub rotation_speed: f32,
}

impl Asteroid {
    /// Build an asteroid with an irregular outline around `position`.
    ///
    /// Each angular slice gets one vertex at a jittered angle and a radius
    /// between 75% and 100% of `nominal_radius`. The entity keeps the radius
    /// of the last vertex as its scalar radius.
    pub fn entity(rng: &mut impl Rng, position: Vec2, velocity: Vec2, nominal_radius: f32) -> Entity {
        let slice = 360.0 / ASTEROID_OUTLINE_SLICES as f32;
        let mut outline = Vec::with_capacity(ASTEROID_OUTLINE_SLICES);
        let mut radius = nominal_radius;

        for i in 0..ASTEROID_OUTLINE_SLICES {
            let angle = (i as f32 * slice + rng.random_range(0.0..slice)).to_radians();
            radius = nominal_radius * rng.random_range(ASTEROID_MIN_RADIUS_FACTOR..1.0);
            // angle 0 points up
            outline.push(position + Vec2::new(angle.sin() * radius, -angle.cos() * radius));
        }

        let rotation_speed = rng.random_range(-ASTEROID_MAX_SPIN..ASTEROID_MAX_SPIN);
        let body = Body::new(position, velocity, 0.0, radius, outline);
        Entity::new(body, EntityKind::Asteroid(Self { rotation_speed }))
    }

    /// Spawn-ready asteroid of `tier` with a random drift in
    /// [-max/2, max/2] on each axis
    pub fn random(rng: &mut impl Rng, position: Vec2, tier: Tier) -> Entity {
        let half = tier.max_velocity() / 2.0;
        let velocity = Vec2::new(rng.random_range(-half..=half), rng.random_range(-half..=half));
        Self::entity(rng, position, velocity, tier.nominal_radius())
    }
}

/// Drift and spin
pub fn update(state: &mut GameState, id: EntityId) {
    let field = state.playfield;
    let Some(entity) = state.registry.get_mut(id) else {
        return;
    };
    let Entity {
        body,
        kind: EntityKind::Asteroid(asteroid),
        ..
    } = entity
    else {
        return;
    };
    body.advance(&field);
    body.rotate(asteroid.rotation_speed);
}

/// Destroy an asteroid, spawning its fragments at its current position.
///
/// Returns the tier it was classified as, or None if `id` is not a live asteroid.
pub fn explode(state: &mut GameState, id: EntityId) -> Option<Tier> {
    let entity = state.registry.get(id)?;
    if !entity.is_asteroid() {
        return None;
    }
    let position = entity.body.position;
    let tier = Tier::classify(entity.body.radius);

    if let Some(child) = tier.split() {
        for _ in 0..ASTEROID_SPLIT_COUNT {
            let fragment = Asteroid::random(&mut state.rng, position, child);
            state.registry.spawn(fragment);
        }
    }
    state.registry.despawn(id);
    log::debug!("asteroid {} ({:?}) exploded", id, tier);
    Some(tier)
}
