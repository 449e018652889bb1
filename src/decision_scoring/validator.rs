/// Placement legality for both rule sets
use crate::dependency::Geometry;
use crate::types::{chebyshev, headquarters_of, GameMode, GameView, Grid, Headquarters, PlayerId};

/// Whether `player` may place an atom at `(row, col)`.
///
/// Pure predicate: bad coordinates, missing headquarters and the like all
/// come back as `false`.
pub fn is_legal_move(
    grid: &Grid,
    row: i32,
    col: i32,
    player: PlayerId,
    mode: GameMode,
    hqs: &[Headquarters],
    geometry: &dyn Geometry,
) -> bool {
    let cell = match grid.cell(row, col) {
        Some(cell) => cell,
        None => return false,
    };

    match mode {
        GameMode::Classic => cell.owner.is_none() || cell.is_owned_by(player),
        GameMode::Headquarters => {
            if hqs.iter().any(|hq| hq.occupies(row, col)) {
                return false;
            }
            if cell.is_enemy_of(player) {
                return false;
            }

            let own_hq = match headquarters_of(hqs, player) {
                Some(hq) if hq.is_alive() => hq,
                _ => return false,
            };

            if !has_placed_atoms(grid, player, hqs) {
                return row == own_hq.row || col == own_hq.col;
            }

            chebyshev(row, col, own_hq.row, own_hq.col) <= 1
                || touches_own_atoms(grid, row, col, player, hqs, geometry)
        }
    }
}

/// Every legal placement for the viewing player in row-major order.
pub fn legal_moves(view: &GameView<'_>) -> Vec<(i32, i32)> {
    view.grid
        .iter()
        .filter(|&(row, col, _)| {
            is_legal_move(
                view.grid,
                row,
                col,
                view.player,
                view.mode,
                view.headquarters,
                view.geometry,
            )
        })
        .map(|(row, col, _)| (row, col))
        .collect()
}

/// Owned atoms outside any headquarters cell count as a first placement.
fn has_placed_atoms(grid: &Grid, player: PlayerId, hqs: &[Headquarters]) -> bool {
    grid.iter().any(|(r, c, cell)| {
        cell.is_owned_by(player)
            && cell.unit_count > 0
            && !hqs.iter().any(|hq| hq.occupies(r, c))
    })
}

fn touches_own_atoms(
    grid: &Grid,
    row: i32,
    col: i32,
    player: PlayerId,
    hqs: &[Headquarters],
    geometry: &dyn Geometry,
) -> bool {
    grid.iter().any(|(r, c, cell)| {
        cell.is_owned_by(player)
            && cell.unit_count > 0
            && !hqs.iter().any(|hq| hq.occupies(r, c))
            && geometry.is_adjacent(row, col, r, c)
    })
}
