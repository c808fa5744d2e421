//! Rock Arena - a wrap-around asteroid field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, registry, collisions, scenes)
//! - `renderer`: CPU-side geometry for a GPU/canvas collaborator
//! - `platform`: Raw input mapping
//! - `audio`: Fire-and-forget sound triggers
//! - `overlay`: Scene panel collaborator
//! - `settings`: JSON configuration

pub mod audio;
pub mod overlay;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default playfield size in pixels
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Ship defaults (per-tick units)
    pub const SHIP_RADIUS: f32 = 15.0;
    pub const SHIP_ACCELERATION: f32 = 0.1;
    pub const SHIP_ROTATION_SPEED: f32 = 4.0; // degrees per tick
    pub const SHIP_FRICTION: f32 = 0.01;
    pub const SHIP_MAX_VELOCITY: f32 = 6.0;
    pub const SHIP_FIRE_COOLDOWN_SECS: f32 = 0.25;

    /// Bullet defaults - always faster than the ship can fly
    pub const BULLET_RADIUS: f32 = 2.0;
    pub const BULLET_MAX_VELOCITY: f32 = 10.0;

    /// Asteroid tiers: nominal radius and max velocity per axis
    pub const ASTEROID_LARGE_RADIUS: f32 = 50.0;
    pub const ASTEROID_LARGE_MAX_VELOCITY: f32 = 2.0;
    pub const ASTEROID_MEDIUM_RADIUS: f32 = 30.0;
    pub const ASTEROID_MEDIUM_MAX_VELOCITY: f32 = 3.0;
    pub const ASTEROID_SMALL_RADIUS: f32 = 15.0;
    pub const ASTEROID_SMALL_MAX_VELOCITY: f32 = 4.0;

    /// Outline vertices sit between this fraction and 1.0 of the tier radius
    pub const ASTEROID_MIN_RADIUS_FACTOR: f32 = 0.75;
    /// Angular slices sampled when building an asteroid outline
    pub const ASTEROID_OUTLINE_SLICES: usize = 12;
    /// Self-rotation range, degrees per tick (symmetric around zero)
    pub const ASTEROID_MAX_SPIN: f32 = 4.0;
    /// Children spawned when a large or medium asteroid breaks
    pub const ASTEROID_SPLIT_COUNT: usize = 3;

    /// Scale applied to the radius sum for circle collisions
    pub const COLLISION_SCALE: f32 = 0.9;

    /// Level setup: minimum spawn distance in large radii, and retry budget
    pub const SPAWN_SEPARATION_RADII: f32 = 4.0;
    pub const SPAWN_MAX_ATTEMPTS: u32 = 100;
    /// Default asteroid count for a bare `generate_asteroids` call
    pub const DEFAULT_ASTEROID_COUNT: usize = 5;
    /// Upper bound on the per-level multiplier taken from settings
    pub const MAX_ASTEROIDS_PER_LEVEL: u32 = 32;

    /// Points per hit, keyed by tier
    pub const SCORE_LARGE: u64 = 20;
    pub const SCORE_MEDIUM: u64 = 50;
    pub const SCORE_SMALL: u64 = 100;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for a heading in degrees (0 = +x, counter-clockwise on screen, y down)
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Rotate an offset by a screen-convention angle in degrees
#[inline]
pub fn rotate_offset(offset: Vec2, angle_deg: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(offset.x * cos + offset.y * sin, -offset.x * sin + offset.y * cos)
}
