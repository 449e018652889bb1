use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use crate::types::{Personality, PlayerId};

/// Per-match table of player personalities.
///
/// Entries are created on first request and never modified afterwards; the
/// only way to change a player's personality is [`PersonalityStore::reset`].
pub struct PersonalityStore {
    roster: Vec<PlayerId>,
    rival_targeting: bool,
    personalities: HashMap<PlayerId, Personality>,
}

impl PersonalityStore {
    pub fn new(roster: &[PlayerId], rival_targeting: bool) -> Self {
        Self {
            roster: roster.to_vec(),
            rival_targeting,
            personalities: HashMap::with_capacity(roster.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.personalities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personalities.is_empty()
    }

    pub fn get(&self, player: PlayerId) -> Option<&Personality> {
        self.personalities.get(&player)
    }

    /// Personality for `player`, drawing one from `rng` the first time.
    pub fn personality_of<R: Rng>(&mut self, player: PlayerId, rng: &mut R) -> Personality {
        let roster = &self.roster;
        let rival_targeting = self.rival_targeting;
        *self.personalities.entry(player).or_insert_with(|| {
            let personality = Personality::generate(player, roster, rival_targeting, rng);
            debug!(
                ?player,
                aggressiveness = personality.aggressiveness,
                defensiveness = personality.defensiveness,
                risk_tolerance = personality.risk_tolerance,
                rival = ?personality.rival,
                "created personality"
            );
            personality
        })
    }

    pub fn reset(&mut self) {
        self.personalities.clear();
    }
}
