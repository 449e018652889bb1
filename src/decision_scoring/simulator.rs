/// Read-only chain-reaction look-ahead
use crate::constants::{FIRST_ORDER_CHAIN_WEIGHT, SECOND_ORDER_CHAIN_WEIGHT};
use crate::dependency::Geometry;
use crate::error::EngineError;
use crate::types::{Grid, PlayerId};

/// Upper-bound estimate of the cascade one atom at `(row, col)` would start.
///
/// Works on a private snapshot and looks exactly two explosion levels deep
/// without resolving anything: first-order neighbours that would tip over
/// score 5, their own neighbours that would tip over score 2.
pub fn estimate_chain_potential(
    grid: &Grid,
    row: i32,
    col: i32,
    player: PlayerId,
    geometry: &dyn Geometry,
) -> Result<f64, EngineError> {
    let mut sim = grid.snapshot();
    let count = sim.place(row, col, player)?;

    let rows = sim.rows();
    let cols = sim.cols();
    let critical = |r: i32, c: i32| geometry.critical_mass(r, c, rows, cols);
    let tips_over = |sim: &Grid, r: i32, c: i32| -> Result<bool, EngineError> {
        Ok(sim.try_cell(r, c)?.unit_count.saturating_add(1) >= critical(r, c))
    };

    if count < critical(row, col) {
        return Ok(0.0);
    }

    let mut potential = 0.0;
    for (nr, nc) in sim.orthogonal_neighbors(row, col) {
        if !tips_over(&sim, nr, nc)? {
            continue;
        }
        potential += FIRST_ORDER_CHAIN_WEIGHT;

        for (sr, sc) in sim.orthogonal_neighbors(nr, nc) {
            if sr == row && sc == col {
                continue;
            }
            if tips_over(&sim, sr, sc)? {
                potential += SECOND_ORDER_CHAIN_WEIGHT;
            }
        }
    }

    Ok(potential)
}
