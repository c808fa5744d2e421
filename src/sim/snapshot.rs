//! Per-tick render snapshot handed to the rendering collaborator

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::Tier;
use super::entity::{EntityId, EntityTag};
use super::scene::Scene;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEntity {
    pub id: EntityId,
    pub kind: EntityTag,
    pub position: Vec2,
    /// Degrees; the renderer rotates the outline about `position` by this
    pub angle: f32,
    pub radius: f32,
    pub outline: Vec<Vec2>,
    /// Asteroid texture slot, by size class
    pub texture: Option<Tier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub score: u64,
    pub level: u32,
    pub scene: Scene,
    /// Live entities in registry order
    pub entities: Vec<RenderEntity>,
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        let entities = state
            .registry
            .iter()
            .map(|e| RenderEntity {
                id: e.id,
                kind: e.tag(),
                position: e.body.position,
                angle: e.body.angle,
                radius: e.body.radius,
                outline: e.body.outline.clone(),
                texture: e.is_asteroid().then(|| Tier::classify(e.body.radius)),
            })
            .collect();

        Self {
            score: state.score.value(),
            level: state.current_level,
            scene: state.scene,
            entities,
        }
    }
}
