//! The player ship: thrust, friction, rate-limited firing

use glam::Vec2;

use super::bullet::Bullet;
use super::collision;
use super::entity::{Body, Entity, EntityId, EntityKind};
use super::state::{GameEvent, GameState, SoundCue};
use crate::consts::*;
use crate::heading;

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Speed gained per thrust tick
    pub acceleration: f32,
    /// Degrees turned per rotate tick
    pub rotation_speed: f32,
    /// Fraction of velocity lost every tick
    pub friction: f32,
    pub fire_cooldown_secs: f32,
    /// Simulation clock at the last successful shot
    pub last_fired_at_ms: Option<f64>,
    /// Thrust is ignored at or above this speed
    pub max_velocity: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            acceleration: SHIP_ACCELERATION,
            rotation_speed: SHIP_ROTATION_SPEED,
            friction: SHIP_FRICTION,
            fire_cooldown_secs: SHIP_FIRE_COOLDOWN_SECS,
            last_fired_at_ms: None,
            max_velocity: SHIP_MAX_VELOCITY,
        }
    }
}

impl Ship {
    /// A stationary ship at `position`, nose along +x
    pub fn entity(position: Vec2) -> Entity {
        let r = SHIP_RADIUS;
        let outline = vec![
            position + Vec2::new(r, 0.0),
            position + Vec2::new(-r * 0.7, -r * 0.6),
            position + Vec2::new(-r * 0.7, r * 0.6),
        ];
        let body = Body::new(position, Vec2::ZERO, 0.0, r, outline);
        Entity::new(body, EntityKind::Ship(Self::default()))
    }

    /// Push along `angle` (defaults to the facing) unless already at max speed.
    /// There is no clamp: a ship above the cap simply stops gaining speed.
    pub fn accelerate(&self, body: &mut Body, angle: Option<f32>) {
        if body.speed() >= self.max_velocity {
            return;
        }
        let angle = angle.filter(|a| a.is_finite()).unwrap_or(body.angle);
        body.velocity += heading(angle) * self.acceleration;
    }

    /// Proportional per-tick decay
    pub fn apply_friction(&self, body: &mut Body) {
        body.velocity -= body.velocity * self.friction;
    }

    /// Check and arm the fire limiter. Returns true if a shot may spawn now.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_fired_at_ms {
            None => true,
            Some(last) => (now_ms - last) / 1000.0 > f64::from(self.fire_cooldown_secs),
        };
        if ready {
            self.last_fired_at_ms = Some(now_ms);
        }
        ready
    }
}

/// Spawn a bullet from the ship if the limiter allows it
pub fn fire(state: &mut GameState, ship_id: EntityId) -> Option<EntityId> {
    let now = state.clock_ms;
    let entity = state.registry.get_mut(ship_id)?;
    let EntityKind::Ship(ship) = &mut entity.kind else {
        return None;
    };
    if !ship.try_fire(now) {
        return None;
    }
    let origin = entity.body.position;
    let angle = entity.body.angle;

    let id = state.registry.spawn(Bullet::entity(origin, angle));
    state.push_event(GameEvent::Sound(SoundCue::FireShot));
    log::debug!("ship {} fired {} at {:.1} deg", ship_id, id, angle);
    Some(id)
}

/// Advance, apply friction, then end the run on contact with any asteroid
pub fn update(state: &mut GameState, id: EntityId) {
    let field = state.playfield;
    let Some(entity) = state.registry.get_mut(id) else {
        return;
    };
    let Entity {
        body,
        kind: EntityKind::Ship(ship),
        ..
    } = entity
    else {
        return;
    };

    body.advance(&field);
    ship.apply_friction(body);
    let body = body.clone();

    if let Some(asteroid) = collision::first_asteroid_hit(&state.registry, &body) {
        log::info!("ship {} hit asteroid {}", id, asteroid);
        state.end_run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerate_along_facing() {
        let mut entity = Ship::entity(Vec2::new(100.0, 100.0));
        let EntityKind::Ship(ship) = &entity.kind else {
            unreachable!()
        };
        let ship = ship.clone();
        entity.body.set_angle(90.0);
        ship.accelerate(&mut entity.body, None);

        assert!(entity.body.velocity.x.abs() < 1e-6);
        assert!((entity.body.velocity.y + SHIP_ACCELERATION).abs() < 1e-6);
    }

    #[test]
    fn test_accelerate_stops_at_cap_without_clamping() {
        let mut entity = Ship::entity(Vec2::ZERO);
        let ship = Ship::default();
        entity.body.velocity = Vec2::new(SHIP_MAX_VELOCITY + 1.0, 0.0);
        ship.accelerate(&mut entity.body, Some(0.0));
        assert_eq!(entity.body.velocity.x, SHIP_MAX_VELOCITY + 1.0);
    }

    #[test]
    fn test_accelerate_at_exact_cap_gains_nothing() {
        let mut entity = Ship::entity(Vec2::ZERO);
        let ship = Ship::default();
        entity.body.velocity = Vec2::new(0.0, SHIP_MAX_VELOCITY);
        ship.accelerate(&mut entity.body, Some(90.0));
        assert_eq!(entity.body.velocity, Vec2::new(0.0, SHIP_MAX_VELOCITY));
    }

    #[test]
    fn test_friction_is_proportional() {
        let mut entity = Ship::entity(Vec2::ZERO);
        let ship = Ship::default();
        entity.body.velocity = Vec2::new(4.0, -2.0);
        ship.apply_friction(&mut entity.body);
        assert!((entity.body.velocity.x - 4.0 * (1.0 - SHIP_FRICTION)).abs() < 1e-6);
        assert!((entity.body.velocity.y + 2.0 * (1.0 - SHIP_FRICTION)).abs() < 1e-6);
    }

    #[test]
    fn test_fire_is_rate_limited() {
        let mut ship = Ship::default();
        assert!(ship.try_fire(1000.0));
        assert!(!ship.try_fire(1100.0));
        // Exactly the cooldown is not enough; it must be exceeded
        assert!(!ship.try_fire(1250.0));
        assert!(ship.try_fire(1251.0));
        assert_eq!(ship.last_fired_at_ms, Some(1251.0));
    }

    #[test]
    fn test_fire_spawns_bullet_at_ship() {
        let mut state = GameState::new(7, Default::default());
        let ship_id = state.registry.spawn(Ship::entity(Vec2::new(200.0, 150.0)));
        if let Some(e) = state.registry.get_mut(ship_id) {
            e.body.set_angle(180.0);
        }

        let bullet_id = fire(&mut state, ship_id).expect("first shot fires");
        let bullet = state.registry.get(bullet_id).expect("bullet registered");
        assert_eq!(bullet.body.position, Vec2::new(200.0, 150.0));
        assert!((bullet.body.velocity.x + BULLET_MAX_VELOCITY).abs() < 1e-4);

        // Same clock, limiter blocks the second shot
        assert!(fire(&mut state, ship_id).is_none());
        assert_eq!(
            state
                .drain_events()
                .iter()
                .filter(|e| **e == GameEvent::Sound(SoundCue::FireShot))
                .count(),
            1
        );
    }
}
