/// Candidate ranking: direct scoring or bounded minimax
use rand::Rng;
use tracing::trace;

use super::scoring::{score_moves, ScoringOptions};
use super::validator::legal_moves;
use crate::constants::{MATERIAL_WEIGHT, MINIMAX_DEPTH};
use crate::dependency::Geometry;
use crate::error::EngineError;
use crate::types::{rank_moves, GameView, Grid, Move, Personality, PlayerCount, PlayerId};

/// Score every legal move with the personality-weighted scorer, best first.
pub fn rank_direct<R: Rng>(
    view: &GameView<'_>,
    personality: &Personality,
    options: ScoringOptions,
    rng: &mut R,
) -> Result<Vec<Move>, EngineError> {
    let candidates = legal_moves(view);
    let mut ranked = score_moves(view, &candidates, personality, options, rng)?;
    rank_moves(&mut ranked);
    Ok(ranked)
}

/// Counters collected during one minimax search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub leaf_evaluations: u64,
}

/// Fixed-depth minimax with alpha-beta pruning over simulated placements.
///
/// Plies only add one atom to a private snapshot; explosions are never
/// resolved, so the leaf heuristic reads chain pressure from loaded cells
/// instead.
#[derive(Debug, Clone)]
pub struct MinimaxSearch {
    player_count: PlayerCount,
    pruning: bool,
    stats: SearchStats,
}

impl MinimaxSearch {
    pub fn new(player_count: PlayerCount) -> Self {
        Self {
            player_count,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Same search, every branch explored.
    pub fn without_pruning(player_count: PlayerCount) -> Self {
        Self {
            pruning: false,
            ..Self::new(player_count)
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimax value of every root move for `view.player`, best first.
    pub fn rank(&mut self, view: &GameView<'_>) -> Result<Vec<Move>, EngineError> {
        self.stats = SearchStats::default();
        let searcher = view.player;
        let next = searcher.next_in_rotation(self.player_count);

        let mut ranked = Vec::new();
        for (row, col) in legal_moves(view) {
            let mut child = view.grid.snapshot();
            child.place(row, col, searcher)?;
            let value = self.search(
                view,
                &child,
                MINIMAX_DEPTH - 1,
                next,
                f64::NEG_INFINITY,
                f64::INFINITY,
            )?;
            ranked.push(Move::new(row, col, value));
        }

        rank_moves(&mut ranked);
        trace!(
            nodes = self.stats.nodes_visited,
            leaves = self.stats.leaf_evaluations,
            pruning = self.pruning,
            "minimax finished"
        );
        Ok(ranked)
    }

    fn search(
        &mut self,
        root: &GameView<'_>,
        grid: &Grid,
        depth: u32,
        mover: PlayerId,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<f64, EngineError> {
        self.stats.nodes_visited += 1;

        let view = root.with_grid(grid).for_player(mover);
        let moves = if depth == 0 {
            Vec::new()
        } else {
            legal_moves(&view)
        };
        if moves.is_empty() {
            self.stats.leaf_evaluations += 1;
            return Ok(material_balance(grid, root.player, root.geometry));
        }

        let maximizing = mover == root.player;
        let next = mover.next_in_rotation(self.player_count);
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for (row, col) in moves {
            let mut child = grid.snapshot();
            child.place(row, col, mover)?;
            let value = self.search(root, &child, depth - 1, next, alpha, beta)?;

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if self.pruning && beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

/// Material count from `player`'s side.
///
/// Each owned cell is worth its atoms times ten, positive for `player` and
/// negative for everyone else. A cell sitting next to a loaded cell of a
/// different owner flips sign, since that neighbour is one atom away from
/// taking it.
pub fn material_balance(grid: &Grid, player: PlayerId, geometry: &dyn Geometry) -> f64 {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut balance = 0.0;

    for (row, col, cell) in grid.iter() {
        let owner = match cell.owner {
            Some(owner) if cell.unit_count > 0 => owner,
            _ => continue,
        };

        let threatened = grid.orthogonal_neighbors(row, col).any(|(nr, nc)| {
            grid.cell(nr, nc)
                .map(|neighbor| {
                    let critical = geometry.critical_mass(nr, nc, rows, cols);
                    let loaded = neighbor.unit_count.saturating_add(1) >= critical;
                    loaded && neighbor.owner.map_or(false, |other| other != owner)
                })
                .unwrap_or(false)
        });

        let mut value = cell.unit_count as f64 * MATERIAL_WEIGHT;
        if owner != player {
            value = -value;
        }
        if threatened {
            value = -value;
        }
        balance += value;
    }

    balance
}
