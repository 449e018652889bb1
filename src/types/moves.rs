use serde::{Deserialize, Serialize};

/// A candidate or chosen placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
    pub score: f64,
}

impl Move {
    pub fn new(row: i32, col: i32, score: f64) -> Self {
        Self { row, col, score }
    }

    pub fn same_cell(&self, row: i32, col: i32) -> bool {
        self.row == row && self.col == col
    }
}

/// Six-channel positional breakdown for one hypothetical placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub aggressive: f64,
    pub defensive: f64,
    pub power_up: f64,
    pub chain_reaction: f64,
    pub territory: f64,
    pub base_threat: f64,
}

impl Evaluation {
    pub fn zero() -> Self {
        Self {
            aggressive: 0.0,
            defensive: 0.0,
            power_up: 0.0,
            chain_reaction: 0.0,
            territory: 0.0,
            base_threat: 0.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.aggressive,
            self.defensive,
            self.power_up,
            self.chain_reaction,
            self.territory,
            self.base_threat,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Sort best-first. Scores must already be finite.
pub fn rank_moves(moves: &mut [Move]) {
    moves.sort_by(|a, b| b.score.total_cmp(&a.score));
}
