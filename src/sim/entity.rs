//! Shared entity record and motion
//!
//! Every simulated object is an `Entity`: a `Body` holding the shared
//! kinematic fields plus an `EntityKind` tag carrying variant data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::ship::Ship;
use crate::normalize_degrees;

/// Opaque registry handle. Allocated monotonically and never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub(crate) u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Rectangular wrap-around playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: crate::consts::PLAYFIELD_WIDTH,
            height: crate::consts::PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Kinematic state shared by every entity variant
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// World-space center
    pub position: Vec2,
    /// Per-tick displacement
    pub velocity: Vec2,
    /// Facing in degrees, always in [0, 360)
    pub angle: f32,
    /// Nominal size used for collisions and render scale
    pub radius: f32,
    /// Polygon in world space at angle 0. A single vertex means "filled circle".
    pub outline: Vec<Vec2>,
    /// Screen-edge crossings since creation
    pub wrap_count: u32,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, angle: f32, radius: f32, outline: Vec<Vec2>) -> Self {
        Self {
            position,
            velocity,
            angle: normalize_degrees(angle),
            radius,
            outline,
            wrap_count: 0,
        }
    }

    /// Move by one tick of velocity, wrapping each axis independently.
    ///
    /// A wrap shifts the position and every outline vertex by `edge - 1`
    /// on that axis. The outline is then translated by velocity, so it
    /// tracks the center exactly.
    pub fn advance(&mut self, field: &Playfield) {
        self.position += self.velocity;

        if let Some(shift) = wrap_shift(self.position.x, field.width) {
            self.position.x += shift;
            for vertex in &mut self.outline {
                vertex.x += shift;
            }
            self.wrap_count += 1;
        }

        if let Some(shift) = wrap_shift(self.position.y, field.height) {
            self.position.y += shift;
            for vertex in &mut self.outline {
                vertex.y += shift;
            }
            self.wrap_count += 1;
        }

        let velocity = self.velocity;
        for vertex in &mut self.outline {
            *vertex += velocity;
        }
    }

    /// Turn by `delta` degrees, keeping the angle in [0, 360)
    pub fn rotate(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.angle = normalize_degrees(self.angle + delta);
    }

    /// Move the center and drag the outline along. Non-finite input is ignored.
    pub fn set_position(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let offset = Vec2::new(x, y) - self.position;
        self.position = Vec2::new(x, y);
        for vertex in &mut self.outline {
            *vertex += offset;
        }
    }

    /// Set the facing. Non-finite input is ignored.
    pub fn set_angle(&mut self, angle: f32) {
        if !angle.is_finite() {
            return;
        }
        self.angle = normalize_degrees(angle);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn distance_to(&self, other: &Body) -> f32 {
        self.position.distance(other.position)
    }
}

/// Signed correction for one axis, or None if the coordinate stays on the field
fn wrap_shift(coord: f32, edge: f32) -> Option<f32> {
    if coord >= edge {
        Some(-(edge - 1.0))
    } else if coord < 0.0 {
        Some(edge - 1.0)
    } else {
        None
    }
}

/// Variant tag plus variant-specific data
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Ship(Ship),
    Bullet(Bullet),
    Asteroid(Asteroid),
}

/// Lightweight tag for filtering and render output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityTag {
    Ship,
    Bullet,
    Asteroid,
}

/// A live simulated object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    /// Build an unregistered entity; the registry assigns the id on spawn
    pub fn new(body: Body, kind: EntityKind) -> Self {
        Self {
            id: EntityId::default(),
            body,
            kind,
        }
    }

    pub fn tag(&self) -> EntityTag {
        match self.kind {
            EntityKind::Ship(_) => EntityTag::Ship,
            EntityKind::Bullet(_) => EntityTag::Bullet,
            EntityKind::Asteroid(_) => EntityTag::Asteroid,
        }
    }

    pub fn is_asteroid(&self) -> bool {
        matches!(self.kind, EntityKind::Asteroid(_))
    }
}
