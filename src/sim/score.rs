//! Score accumulator

use serde::{Deserialize, Serialize};

use super::asteroid::Tier;

/// Monotonic per-run score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Add the points for a hit on `tier`, returning the points awarded
    pub fn add_hit(&mut self, tier: Tier) -> u64 {
        let points = tier.points();
        self.0 = self.0.saturating_add(points);
        points
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}
