use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player's base in headquarters mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headquarters {
    pub row: i32,
    pub col: i32,
    pub owner: PlayerId,
    pub health: i32,
}

impl Headquarters {
    pub fn new(row: i32, col: i32, owner: PlayerId, health: i32) -> Self {
        Self {
            row,
            col,
            owner,
            health,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn occupies(&self, row: i32, col: i32) -> bool {
        self.row == row && self.col == col
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpKind {
    Diamond,
    Heart,
}

/// A capturable bonus sitting on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub row: i32,
    pub col: i32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(row: i32, col: i32, kind: PowerUpKind) -> Self {
        Self { row, col, kind }
    }
}

/// Headquarters owned by `player`, if any.
pub fn headquarters_of(hqs: &[Headquarters], player: PlayerId) -> Option<&Headquarters> {
    hqs.iter().find(|hq| hq.owner == player)
}

pub fn manhattan(r1: i32, c1: i32, r2: i32, c2: i32) -> i32 {
    (r1 - r2).abs() + (c1 - c2).abs()
}

pub fn chebyshev(r1: i32, c1: i32, r2: i32, c2: i32) -> i32 {
    (r1 - r2).abs().max((c1 - c2).abs())
}
