/// Final move choice: overrides, then top-k sampling
use rand::Rng;
use tracing::debug;

use super::scoring::ScoringOptions;
use super::search::{rank_direct, MinimaxSearch, SearchStats};
use super::validator::is_legal_move;
use crate::config::{EngineConfig, SearchStrategy};
use crate::constants::*;
use crate::error::EngineError;
use crate::types::{chebyshev, manhattan, rank_moves, GameView, Move, Personality};

/// Outcome of one selection, with the numbers the engine reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub chosen: Option<Move>,
    pub candidate_count: usize,
    pub search: Option<SearchStats>,
}

impl Selection {
    fn none() -> Self {
        Self {
            chosen: None,
            candidate_count: 0,
            search: None,
        }
    }
}

/// Pick a placement for `view.player`.
pub fn select_move<R: Rng>(
    view: &GameView<'_>,
    personality: &Personality,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<Option<Move>, EngineError> {
    Ok(select(view, personality, config, rng)?.chosen)
}

/// [`select_move`] plus candidate and search counters.
pub fn select<R: Rng>(
    view: &GameView<'_>,
    personality: &Personality,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<Selection, EngineError> {
    if let Some(grab) = power_up_grab(view) {
        debug!(row = grab.row, col = grab.col, "taking power-up");
        return Ok(Selection {
            chosen: Some(grab),
            candidate_count: 1,
            search: None,
        });
    }

    let (mut ranked, search) = match config.strategy {
        SearchStrategy::Direct => {
            let options = ScoringOptions {
                immediate_explosion_bonus: config.immediate_explosion_bonus,
            };
            (rank_direct(view, personality, options, rng)?, None)
        }
        SearchStrategy::Minimax => {
            let mut minimax = MinimaxSearch::new(config.player_count);
            let ranked = minimax.rank(view)?;
            (ranked, Some(minimax.stats()))
        }
    };

    if ranked.is_empty() {
        return Ok(Selection::none());
    }

    if under_siege(view) {
        apply_emergency_defense(view, &mut ranked);
        rank_moves(&mut ranked);
    }

    let k = top_k(personality.risk_tolerance, ranked.len());
    let chosen = ranked[rng.gen_range(0..k)];
    debug!(
        player = ?view.player,
        row = chosen.row,
        col = chosen.col,
        score = chosen.score,
        candidates = ranked.len(),
        k,
        "selected move"
    );

    Ok(Selection {
        chosen: Some(chosen),
        candidate_count: ranked.len(),
        search,
    })
}

/// First legal placement on a power-up, in power-up order.
fn power_up_grab(view: &GameView<'_>) -> Option<Move> {
    view.power_ups
        .iter()
        .find(|power_up| {
            is_legal_move(
                view.grid,
                power_up.row,
                power_up.col,
                view.player,
                view.mode,
                view.headquarters,
                view.geometry,
            )
        })
        .map(|power_up| Move::new(power_up.row, power_up.col, f64::MAX))
}

/// Enemy cell with enough atoms sitting right next to our living headquarters.
fn under_siege(view: &GameView<'_>) -> bool {
    if !view.mode.is_headquarters() {
        return false;
    }
    let hq = match view.own_headquarters() {
        Some(hq) if hq.is_alive() => hq,
        _ => return false,
    };

    view.grid.iter().any(|(row, col, cell)| {
        cell.is_enemy_of(view.player)
            && cell.unit_count >= EMERGENCY_MIN_UNITS
            && chebyshev(row, col, hq.row, hq.col) <= EMERGENCY_RADIUS
    })
}

fn apply_emergency_defense(view: &GameView<'_>, ranked: &mut [Move]) {
    let hq = match view.own_headquarters() {
        Some(hq) => hq,
        None => return,
    };
    for candidate in ranked.iter_mut() {
        if manhattan(candidate.row, candidate.col, hq.row, hq.col) <= EMERGENCY_RADIUS {
            candidate.score += EMERGENCY_DEFENSE_BONUS;
        }
    }
}

/// Width of the sampling window; always at least one.
pub fn top_k(risk_tolerance: f64, candidates: usize) -> usize {
    let extra = (risk_tolerance.clamp(0.0, 1.0) * MAX_EXTRA_TOP_K).floor() as usize;
    (1 + extra).min(candidates).max(1)
}
