use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Closed interval a trait is drawn from
#[derive(Debug, Clone, Copy)]
pub struct TraitRange {
    pub min: f64,
    pub max: f64,
}

impl TraitRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

pub const AGGRESSIVENESS_RANGE: TraitRange = TraitRange::new(0.2, 3.0);
pub const DEFENSIVENESS_RANGE: TraitRange = TraitRange::new(0.3, 2.5);
pub const GREED_RANGE: TraitRange = TraitRange::new(0.5, 2.5);
pub const CHAIN_AFFINITY_RANGE: TraitRange = TraitRange::new(0.3, 2.0);
pub const TERRITORIALITY_RANGE: TraitRange = TraitRange::new(0.2, 1.5);
pub const BASE_HUNTING_RANGE: TraitRange = TraitRange::new(0.3, 2.5);
pub const RISK_TOLERANCE_RANGE: TraitRange = TraitRange::new(0.0, 1.0);
pub const CHAOS_RANGE: TraitRange = TraitRange::new(0.0, 1.0);

/// Session-stable strategic bias of one player.
///
/// Each trait multiplies the matching evaluation channel; `risk_tolerance`
/// and `chaos` drive the randomness injected into final scores and the width
/// of the top-k sampling window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub owner: PlayerId,
    pub aggressiveness: f64,
    pub defensiveness: f64,
    pub greed: f64,
    pub chain_affinity: f64,
    pub territoriality: f64,
    pub base_hunting: f64,
    pub risk_tolerance: f64,
    pub chaos: f64,
    /// Opponent this player prefers to hunt, when rival targeting is enabled
    pub rival: Option<PlayerId>,
}

impl Personality {
    /// Draw a fresh trait vector. `roster` is only consulted for the rival.
    pub fn generate<R: Rng>(
        owner: PlayerId,
        roster: &[PlayerId],
        rival_targeting: bool,
        rng: &mut R,
    ) -> Self {
        let aggressiveness = AGGRESSIVENESS_RANGE.sample(rng);
        let defensiveness = DEFENSIVENESS_RANGE.sample(rng);
        let greed = GREED_RANGE.sample(rng);
        let chain_affinity = CHAIN_AFFINITY_RANGE.sample(rng);
        let territoriality = TERRITORIALITY_RANGE.sample(rng);
        let base_hunting = BASE_HUNTING_RANGE.sample(rng);
        let risk_tolerance = RISK_TOLERANCE_RANGE.sample(rng);
        let chaos = CHAOS_RANGE.sample(rng);

        let rival = if rival_targeting {
            let candidates: Vec<PlayerId> =
                roster.iter().copied().filter(|&p| p != owner).collect();
            candidates.choose(rng).copied()
        } else {
            None
        };

        Self {
            owner,
            aggressiveness,
            defensiveness,
            greed,
            chain_affinity,
            territoriality,
            base_hunting,
            risk_tolerance,
            chaos,
            rival,
        }
    }

    /// Neutral weights with no randomness; handy as a baseline.
    pub fn balanced(owner: PlayerId) -> Self {
        Self {
            owner,
            aggressiveness: 1.0,
            defensiveness: 1.0,
            greed: 1.0,
            chain_affinity: 1.0,
            territoriality: 1.0,
            base_hunting: 1.0,
            risk_tolerance: 0.0,
            chaos: 0.0,
            rival: None,
        }
    }

    pub fn traits(&self) -> [f64; 8] {
        [
            self.aggressiveness,
            self.defensiveness,
            self.greed,
            self.chain_affinity,
            self.territoriality,
            self.base_hunting,
            self.risk_tolerance,
            self.chaos,
        ]
    }

    pub fn within_ranges(&self) -> bool {
        AGGRESSIVENESS_RANGE.contains(self.aggressiveness)
            && DEFENSIVENESS_RANGE.contains(self.defensiveness)
            && GREED_RANGE.contains(self.greed)
            && CHAIN_AFFINITY_RANGE.contains(self.chain_affinity)
            && TERRITORIALITY_RANGE.contains(self.territoriality)
            && BASE_HUNTING_RANGE.contains(self.base_hunting)
            && RISK_TOLERANCE_RANGE.contains(self.risk_tolerance)
            && CHAOS_RANGE.contains(self.chaos)
    }
}
