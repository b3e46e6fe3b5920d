//! Score ledger with chained ghost-capture combos

use serde::{Deserialize, Serialize};

use crate::consts::{GHOST_BASE_POINTS, PELLET_POINTS, POWER_PELLET_POINTS};

/// Per-round score. Replaced, never merged, on round reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    pub score: u64,
    /// Captures since the last power pellet
    pub combo_chain: u32,
    /// Running maximum of `combo_chain`
    pub max_combo: u32,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award_pellet(&mut self) {
        self.score += PELLET_POINTS;
    }

    /// Power pellet: flat points and a fresh chain
    pub fn award_power_pellet(&mut self) {
        self.score += POWER_PELLET_POINTS;
        self.combo_chain = 0;
    }

    pub fn award_fruit(&mut self, value: u64) {
        self.score += value;
    }

    /// Ghost capture. The chain increments first, then
    /// `points = 200 * train_index * chain`. Returns the points awarded.
    pub fn award_ghost_capture(&mut self, train_index: u32) -> u64 {
        self.combo_chain += 1;
        self.max_combo = self.max_combo.max(self.combo_chain);
        let points = GHOST_BASE_POINTS * u64::from(train_index) * u64::from(self.combo_chain);
        self.score += points;
        points
    }
}
