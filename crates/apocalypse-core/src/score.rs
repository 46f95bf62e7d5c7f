//! Running score and derived player progression.

use serde::{Deserialize, Serialize};

use crate::constants::POINTS_PER_LEVEL;

/// Accumulated score for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub missiles_destroyed: u32,
    pub bonus_hits: u32,
}

impl ScoreState {
    /// Player level derived from score: one level per 1000 points,
    /// starting at level 1.
    pub fn player_level(&self) -> u32 {
        (self.score / POINTS_PER_LEVEL) as u32 + 1
    }
}
