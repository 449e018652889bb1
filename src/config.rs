use serde::{Deserialize, Serialize};

use crate::types::PlayerCount;

/// How candidate moves are ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Score each legal move on its own with the personality-weighted scorer
    Direct,
    /// Three-ply minimax with alpha-beta pruning over simulated placements
    Minimax,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::Direct
    }
}

/// Engine configuration for one match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub player_count: PlayerCount,
    pub strategy: SearchStrategy,
    pub rival_targeting: bool,           // Each personality picks an opponent to hunt
    pub immediate_explosion_bonus: bool, // Reward placements that explode right away
    pub seed: Option<u64>,               // Fixed RNG seed; entropy when absent
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            player_count: PlayerCount::Two,
            strategy: SearchStrategy::Direct,
            rival_targeting: false,
            immediate_explosion_bonus: false,
            seed: None,
        }
    }

    pub fn with_player_count(player_count: PlayerCount) -> Self {
        Self {
            player_count,
            ..Self::new()
        }
    }

    /// Turn on every optional scoring capability.
    pub fn extended(player_count: PlayerCount) -> Self {
        Self {
            player_count,
            rival_targeting: true,
            immediate_explosion_bonus: true,
            ..Self::new()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
