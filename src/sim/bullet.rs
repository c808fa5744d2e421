//! Bullets: fixed speed, one hit, spent after one screen wrap

use glam::Vec2;

use super::asteroid;
use super::collision;
use super::entity::{Body, Entity, EntityId, EntityKind};
use super::state::GameState;
use crate::consts::*;
use crate::heading;

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub max_velocity: f32,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            max_velocity: BULLET_MAX_VELOCITY,
        }
    }
}

impl Bullet {
    /// A bullet leaving `origin` along `angle` degrees at full speed
    pub fn entity(origin: Vec2, angle: f32) -> Entity {
        let bullet = Self::default();
        let velocity = heading(angle) * bullet.max_velocity;
        let body = Body::new(origin, velocity, angle, BULLET_RADIUS, vec![origin]);
        Entity::new(body, EntityKind::Bullet(bullet))
    }
}

/// Advance, resolve at most one asteroid hit, then expire after a wrap
pub fn update(state: &mut GameState, id: EntityId) {
    let field = state.playfield;
    let Some(entity) = state.registry.get_mut(id) else {
        return;
    };
    if !matches!(entity.kind, EntityKind::Bullet(_)) {
        return;
    }
    entity.body.advance(&field);
    let body = entity.body.clone();

    if let Some(target) = collision::first_asteroid_hit(&state.registry, &body) {
        if let Some(tier) = asteroid::explode(state, target) {
            state.award(tier);
        }
        state.registry.despawn(id);
        return;
    }

    if body.wrap_count >= 1 {
        log::debug!("bullet {} spent after wrapping", id);
        state.registry.despawn(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::Asteroid;
    use crate::sim::entity::EntityTag;

    fn state() -> GameState {
        GameState::new(11, Default::default())
    }

    #[test]
    fn test_bullet_survives_without_wrap() {
        let mut state = state();
        let id = state.registry.spawn(Bullet::entity(Vec2::new(400.0, 300.0), 0.0));
        update(&mut state, id);
        let bullet = state.registry.get(id).expect("still alive");
        assert_eq!(bullet.body.wrap_count, 0);
        assert!((bullet.body.position.x - 410.0).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_expires_on_first_wrap() {
        let mut state = state();
        let id = state.registry.spawn(Bullet::entity(Vec2::new(795.0, 300.0), 0.0));
        update(&mut state, id);
        assert!(!state.registry.contains(id));
    }

    #[test]
    fn test_bullet_hit_scores_and_splits() {
        let mut state = state();
        let rock = Asteroid::entity(&mut state.rng, Vec2::new(420.0, 300.0), Vec2::ZERO, ASTEROID_LARGE_RADIUS);
        let rock_id = state.registry.spawn(rock);
        let id = state.registry.spawn(Bullet::entity(Vec2::new(400.0, 300.0), 0.0));

        update(&mut state, id);

        assert!(!state.registry.contains(id));
        assert!(!state.registry.contains(rock_id));
        assert_eq!(state.registry.count_tagged(EntityTag::Asteroid), ASTEROID_SPLIT_COUNT);
        assert_eq!(state.score.value(), SCORE_LARGE);
    }

    #[test]
    fn test_bullet_resolves_only_first_asteroid() {
        let mut state = state();
        let first = state.registry.spawn(Asteroid::entity(
            &mut state.rng,
            Vec2::new(405.0, 300.0),
            Vec2::ZERO,
            ASTEROID_SMALL_RADIUS,
        ));
        let second = state.registry.spawn(Asteroid::entity(
            &mut state.rng,
            Vec2::new(412.0, 300.0),
            Vec2::ZERO,
            ASTEROID_SMALL_RADIUS,
        ));
        let id = state.registry.spawn(Bullet::entity(Vec2::new(400.0, 300.0), 0.0));

        update(&mut state, id);

        assert!(!state.registry.contains(first));
        assert!(state.registry.contains(second));
        assert_eq!(state.score.value(), SCORE_SMALL);
    }
}
