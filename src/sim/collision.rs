//! Circle proximity tests between entities and asteroids
//!
//! Outlines are tracked for rendering only; collisions compare centers
//! against a scaled sum of the scalar radii.

use super::entity::{Body, EntityId};
use super::registry::Registry;
use crate::consts::COLLISION_SCALE;

/// True if two bodies are closer than `COLLISION_SCALE * (r1 + r2)`
pub fn circles_overlap(a: &Body, b: &Body) -> bool {
    a.distance_to(b) < COLLISION_SCALE * (a.radius + b.radius)
}

/// First asteroid in registry order overlapping `body`
pub fn first_asteroid_hit(registry: &Registry, body: &Body) -> Option<EntityId> {
    registry
        .asteroids()
        .find(|asteroid| circles_overlap(body, &asteroid.body))
        .map(|asteroid| asteroid.id)
}
