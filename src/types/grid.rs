use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::EngineError;

/// A single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Player that owns this cell (None if unclaimed)
    #[serde(default)]
    pub owner: Option<PlayerId>,
    /// Atoms currently stacked on this cell
    #[serde(default)]
    pub unit_count: u32,
}

impl Cell {
    pub fn new() -> Self {
        Self {
            owner: None,
            unit_count: 0,
        }
    }

    pub fn with_owner(owner: PlayerId, unit_count: u32) -> Self {
        Self {
            owner: Some(owner),
            unit_count,
        }
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Owned by someone other than `player`.
    pub fn is_enemy_of(&self, player: PlayerId) -> bool {
        matches!(self.owner, Some(owner) if owner != player)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

/// Dense row-major board snapshot.
///
/// The host owns the authoritative grid; look-ahead code works on copies made
/// with [`Grid::snapshot`] so the caller's grid is never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let row_count = rows.len();
        let col_count = rows.first().map(Vec::len).unwrap_or(0);
        if row_count == 0 || col_count == 0 {
            return Err(EngineError::InvalidGrid {
                reason: "grid must have at least one row and one column".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(row_count * col_count);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(EngineError::InvalidGrid {
                    reason: format!(
                        "row {} has {} cells, expected {}",
                        index,
                        row.len(),
                        col_count
                    ),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Deep copy used by every simulation path.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.contains(row, col) {
            Some(row as usize * self.cols + col as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    pub fn cell_mut(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        self.index(row, col).map(move |idx| &mut self.cells[idx])
    }

    /// Like [`Grid::cell`] but reports a bad coordinate as an error.
    pub fn try_cell(&self, row: i32, col: i32) -> Result<&Cell, EngineError> {
        self.cell(row, col)
            .ok_or(EngineError::OutOfBounds { row, col })
    }

    /// Add one atom for `player` without resolving explosions.
    pub fn place(&mut self, row: i32, col: i32, player: PlayerId) -> Result<u32, EngineError> {
        let cell = self
            .cell_mut(row, col)
            .ok_or(EngineError::OutOfBounds { row, col })?;
        cell.owner = Some(player);
        cell.unit_count = cell.unit_count.saturating_add(1);
        Ok(cell.unit_count)
    }

    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), EngineError> {
        let slot = self
            .cell_mut(row, col)
            .ok_or(EngineError::OutOfBounds { row, col })?;
        *slot = cell;
        Ok(())
    }

    /// Iterate `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx / cols) as i32, (idx % cols) as i32, cell))
    }

    /// In-bounds orthogonal neighbours of a position.
    pub fn orthogonal_neighbors(&self, row: i32, col: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        const OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS
            .iter()
            .map(move |(dr, dc)| (row + dr, col + dc))
            .filter(move |&(r, c)| self.contains(r, c))
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.cells
            .chunks(grid.cols.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}
