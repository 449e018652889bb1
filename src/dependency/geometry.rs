/// Board geometry rules supplied by the host game.
///
/// Both functions must be pure. The engine never computes critical mass or
/// adjacency itself.
pub trait Geometry {
    fn critical_mass(&self, row: i32, col: i32, rows: usize, cols: usize) -> u32;

    fn is_adjacent(&self, row1: i32, col1: i32, row2: i32, col2: i32) -> bool;
}

/// Conventional chain-reaction rules: corners explode at 2, edges at 3,
/// interior cells at 4; adjacency includes diagonals.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGeometry;

impl Geometry for StandardGeometry {
    fn critical_mass(&self, row: i32, col: i32, rows: usize, cols: usize) -> u32 {
        let last_row = rows as i32 - 1;
        let last_col = cols as i32 - 1;
        let on_row_edge = row == 0 || row == last_row;
        let on_col_edge = col == 0 || col == last_col;
        match (on_row_edge, on_col_edge) {
            (true, true) => 2,
            (true, false) | (false, true) => 3,
            (false, false) => 4,
        }
    }

    fn is_adjacent(&self, row1: i32, col1: i32, row2: i32, col2: i32) -> bool {
        let dr = (row1 - row2).abs();
        let dc = (col1 - col2).abs();
        dr <= 1 && dc <= 1 && (dr + dc) > 0
    }
}
