/// Six-channel positional evaluation of a hypothetical placement
use rand::Rng;

use super::simulator::estimate_chain_potential;
use crate::constants::*;
use crate::error::EngineError;
use crate::types::{chebyshev, manhattan, Evaluation, GameView, Headquarters, PowerUpKind};

/// Score every channel for one atom placed at `(row, col)` by `view.player`.
///
/// Power-up, defensive and base-threat channels only apply in headquarters
/// mode. Territory and defensive channels draw fresh jitter from `rng` on every
/// call; aggressive and base-threat are deterministic.
pub fn evaluate<R: Rng>(
    view: &GameView<'_>,
    row: i32,
    col: i32,
    rng: &mut R,
) -> Result<Evaluation, EngineError> {
    let explodes = view.would_explode(row, col)?;
    let hq_mode = view.mode.is_headquarters();

    let evaluation = Evaluation {
        aggressive: aggressive_score(view, row, col, explodes)?,
        defensive: if hq_mode {
            defensive_score(view, row, col, rng)?
        } else {
            0.0
        },
        power_up: if hq_mode {
            power_up_score(view, row, col)
        } else {
            0.0
        },
        chain_reaction: chain_reaction_score(view, row, col)?,
        territory: territory_score(view, row, col, rng)?,
        base_threat: if hq_mode {
            base_threat_score(view, row, col, explodes)
        } else {
            0.0
        },
    };

    if !evaluation.is_finite() {
        return Err(EngineError::NonFiniteScore { row, col });
    }
    Ok(evaluation)
}

pub fn power_up_score(view: &GameView<'_>, row: i32, col: i32) -> f64 {
    let low_health = view
        .own_headquarters()
        .map(|hq| hq.health <= LOW_HEALTH_THRESHOLD)
        .unwrap_or(false);

    view.power_ups
        .iter()
        .map(|power_up| {
            let kind_weight = match power_up.kind {
                PowerUpKind::Heart if low_health => HEART_LOW_HEALTH_MULTIPLIER,
                PowerUpKind::Heart | PowerUpKind::Diamond => 1.0,
            };
            let distance = manhattan(row, col, power_up.row, power_up.col);
            let base = if distance == 0 {
                POWER_UP_CAPTURE_BONUS
            } else if distance <= POWER_UP_RADIUS {
                POWER_UP_NEARBY_BONUS * POWER_UP_FALLOFF.powi(distance)
            } else {
                0.0
            };
            base * kind_weight
        })
        .sum()
}

pub fn territory_score<R: Rng>(
    view: &GameView<'_>,
    row: i32,
    col: i32,
    rng: &mut R,
) -> Result<f64, EngineError> {
    let grid = view.grid;
    let last_row = grid.rows() as i32 - 1;
    let last_col = grid.cols() as i32 - 1;

    if view.mode.is_headquarters() {
        let center_r = last_row as f64 / 2.0;
        let center_c = last_col as f64 / 2.0;
        let max_distance = (center_r + center_c).max(1.0);
        let distance = (row as f64 - center_r).abs() + (col as f64 - center_c).abs();
        let centrality = 1.0 - distance / max_distance;
        return Ok(HQ_TERRITORY_BASE
            + HQ_TERRITORY_CENTER_PULL * centrality
            + rng.gen_range(0.0..HQ_TERRITORY_JITTER));
    }

    let on_row_edge = row == 0 || row == last_row;
    let on_col_edge = col == 0 || col == last_col;
    let mut score = match (on_row_edge, on_col_edge) {
        (true, true) => CORNER_BASE + rng.gen_range(0.0..CORNER_JITTER),
        (true, false) | (false, true) => EDGE_BASE + rng.gen_range(0.0..EDGE_JITTER),
        (false, false) => CENTER_BASE + rng.gen_range(0.0..CENTER_JITTER),
    };

    let mut has_friendly_neighbor = false;
    for (nr, nc) in grid.orthogonal_neighbors(row, col) {
        if grid.try_cell(nr, nc)?.is_owned_by(view.player) {
            has_friendly_neighbor = true;
            break;
        }
    }
    if !has_friendly_neighbor {
        score += SPREAD_BONUS + rng.gen_range(0.0..SPREAD_JITTER);
    }

    Ok(score)
}

/// Enemy atoms the placement would capture if it explodes.
pub fn aggressive_score(
    view: &GameView<'_>,
    row: i32,
    col: i32,
    explodes: bool,
) -> Result<f64, EngineError> {
    if !explodes {
        return Ok(0.0);
    }

    let grid = view.grid;
    let mut score = 0.0;
    for (nr, nc) in grid.orthogonal_neighbors(row, col) {
        let neighbor = grid.try_cell(nr, nc)?;
        if neighbor.is_enemy_of(view.player) {
            score += CAPTURE_WEIGHT * neighbor.unit_count as f64;
        }
    }

    if view.mode.is_headquarters() {
        for dr in -PROXIMITY_WINDOW_RADIUS..=PROXIMITY_WINDOW_RADIUS {
            for dc in -PROXIMITY_WINDOW_RADIUS..=PROXIMITY_WINDOW_RADIUS {
                let (r, c) = (row + dr, col + dc);
                let distance = dr.abs() + dc.abs();
                if distance == 0 {
                    continue;
                }
                if let Some(cell) = grid.cell(r, c) {
                    if cell.is_enemy_of(view.player) {
                        score += ENEMY_PROXIMITY_WEIGHT / distance as f64;
                    }
                }
            }
        }
    }

    Ok(score)
}

/// Pressure the placement puts on living enemy headquarters.
pub fn base_threat_score(view: &GameView<'_>, row: i32, col: i32, explodes: bool) -> f64 {
    view.headquarters
        .iter()
        .filter(|hq| hq.owner != view.player && hq.is_alive())
        .map(|hq| headquarters_threat(row, col, hq, explodes))
        .sum()
}

/// Base-threat share contributed by a single headquarters.
pub fn headquarters_threat(row: i32, col: i32, hq: &Headquarters, explodes: bool) -> f64 {
    let distance = manhattan(row, col, hq.row, hq.col);
    if distance > BASE_THREAT_RADIUS {
        return 0.0;
    }
    let mut threat = BASE_THREAT_WEIGHT * (BASE_THREAT_RADIUS + 1 - distance) as f64;
    if explodes && distance <= BASE_EXPLOSION_RADIUS {
        threat += BASE_EXPLOSION_BONUS;
    }
    threat
}

/// Urgency of guarding the player's own headquarters with this placement.
pub fn defensive_score<R: Rng>(
    view: &GameView<'_>,
    row: i32,
    col: i32,
    rng: &mut R,
) -> Result<f64, EngineError> {
    let hq = match view.own_headquarters() {
        Some(hq) => hq,
        None => return Ok(0.0),
    };
    let grid = view.grid;

    let mut threat = 0.0;
    let mut lanes_blocked = 0u32;
    let move_distance = manhattan(row, col, hq.row, hq.col);

    for dr in -DEFENSE_WINDOW_RADIUS..=DEFENSE_WINDOW_RADIUS {
        for dc in -DEFENSE_WINDOW_RADIUS..=DEFENSE_WINDOW_RADIUS {
            let (r, c) = (hq.row + dr, hq.col + dc);
            let cell = match grid.cell(r, c) {
                Some(cell) => cell,
                None => continue,
            };
            if !cell.is_enemy_of(view.player) || cell.unit_count == 0 {
                continue;
            }

            let distance = manhattan(r, c, hq.row, hq.col).max(1);
            threat += THREAT_WEIGHT * cell.unit_count as f64 / distance as f64;

            if blocks_lane(row, col, hq.row, hq.col, r, c) && move_distance < distance {
                lanes_blocked += 1;
            }
        }
    }

    let proximity = (DEFENSE_WINDOW_RADIUS + 1 - move_distance).max(0) as f64
        / (DEFENSE_WINDOW_RADIUS + 1) as f64;
    let mut score = threat * proximity;

    let target = grid.try_cell(row, col)?;
    if target.is_enemy_of(view.player) && chebyshev(row, col, hq.row, hq.col) <= DEFENSE_WINDOW_RADIUS {
        score += RECLAIM_BONUS;
    }

    for _ in 0..lanes_blocked {
        let jitter = rng.gen_range(-LANE_BLOCK_JITTER..=LANE_BLOCK_JITTER);
        score += LANE_BLOCK_BONUS * (1.0 + jitter);
    }

    if hq.health <= LOW_HEALTH_THRESHOLD {
        score *= 2.0;
    }

    Ok(score)
}

pub fn chain_reaction_score(view: &GameView<'_>, row: i32, col: i32) -> Result<f64, EngineError> {
    let potential = estimate_chain_potential(view.grid, row, col, view.player, view.geometry)?;
    Ok(potential * CHAIN_SCORE_MULTIPLIER)
}

/// Strictly inside the bounding box between the headquarters and an enemy.
fn blocks_lane(row: i32, col: i32, hq_row: i32, hq_col: i32, enemy_row: i32, enemy_col: i32) -> bool {
    let within_rows = row >= hq_row.min(enemy_row) && row <= hq_row.max(enemy_row);
    let within_cols = col >= hq_col.min(enemy_col) && col <= hq_col.max(enemy_col);
    let is_endpoint = (row == hq_row && col == hq_col) || (row == enemy_row && col == enemy_col);
    within_rows && within_cols && !is_endpoint
}
