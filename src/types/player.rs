use serde::{Deserialize, Serialize};

/// Seat identity of a player at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    Red,
    Blue,
    Green,
    Yellow,
}

/// Number of seats in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum PlayerCount {
    Two = 2,
    Three = 3,
    Four = 4,
}

impl From<PlayerCount> for u32 {
    fn from(count: PlayerCount) -> u32 {
        count as u32
    }
}

impl TryFrom<u32> for PlayerCount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(PlayerCount::Two),
            3 => Ok(PlayerCount::Three),
            4 => Ok(PlayerCount::Four),
            other => Err(format!("unsupported player count {}", other)),
        }
    }
}

impl PlayerCount {
    /// Seats in turn order.
    pub fn roster(self) -> &'static [PlayerId] {
        const ALL: [PlayerId; 4] = [
            PlayerId::Red,
            PlayerId::Blue,
            PlayerId::Green,
            PlayerId::Yellow,
        ];
        match self {
            PlayerCount::Two => &ALL[..2],
            PlayerCount::Three => &ALL[..3],
            PlayerCount::Four => &ALL[..4],
        }
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        PlayerCount::Two
    }
}

impl PlayerId {
    /// Next seat to move after `self` for the given table size.
    ///
    /// A seat that is not part of the table (e.g. `Yellow` in a two-player
    /// match) hands the turn back to `Red`.
    pub fn next_in_rotation(self, count: PlayerCount) -> PlayerId {
        use PlayerCount::*;
        use PlayerId::*;
        match (count, self) {
            (Two, Red) => Blue,
            (Two, Blue) => Red,
            (Two, Green) => Red,
            (Two, Yellow) => Red,
            (Three, Red) => Blue,
            (Three, Blue) => Green,
            (Three, Green) => Red,
            (Three, Yellow) => Red,
            (Four, Red) => Blue,
            (Four, Blue) => Green,
            (Four, Green) => Yellow,
            (Four, Yellow) => Red,
        }
    }
}

/// Rule set the match is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Classic,
    Headquarters,
}

impl GameMode {
    pub fn is_headquarters(self) -> bool {
        matches!(self, GameMode::Headquarters)
    }
}
