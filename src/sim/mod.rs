//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registry order = spawn order)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod bullet;
pub mod collision;
pub mod entity;
pub mod registry;
pub mod scene;
pub mod score;
pub mod ship;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, Tier};
pub use bullet::Bullet;
pub use collision::{circles_overlap, first_asteroid_hit};
pub use entity::{Body, Entity, EntityId, EntityKind, EntityTag, Playfield};
pub use registry::Registry;
pub use scene::{Command, Overlay, Scene};
pub use score::Score;
pub use ship::Ship;
pub use snapshot::{RenderEntity, RenderFrame};
pub use state::{GameEvent, GameState, SoundCue};
pub use tick::{TickInput, TickOutcome, tick};
