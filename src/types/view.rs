use super::board_objects::{headquarters_of, Headquarters, PowerUp};
use super::grid::{Cell, Grid};
use super::player::{GameMode, PlayerId};
use crate::dependency::Geometry;
use crate::error::EngineError;

/// Read-only bundle handed to validation and scoring for one turn
#[derive(Clone, Copy)]
pub struct GameView<'a> {
    pub grid: &'a Grid,
    pub player: PlayerId,
    pub mode: GameMode,
    pub headquarters: &'a [Headquarters],
    pub power_ups: &'a [PowerUp],
    pub geometry: &'a dyn Geometry,
}

impl<'a> GameView<'a> {
    pub fn classic(grid: &'a Grid, player: PlayerId, geometry: &'a dyn Geometry) -> Self {
        Self {
            grid,
            player,
            mode: GameMode::Classic,
            headquarters: &[],
            power_ups: &[],
            geometry,
        }
    }

    /// Same board seen from another seat.
    pub fn for_player(&self, player: PlayerId) -> Self {
        Self { player, ..*self }
    }

    /// Same everything, different board.
    pub fn with_grid<'b>(&self, grid: &'b Grid) -> GameView<'b>
    where
        'a: 'b,
    {
        GameView {
            grid,
            player: self.player,
            mode: self.mode,
            headquarters: self.headquarters,
            power_ups: self.power_ups,
            geometry: self.geometry,
        }
    }

    pub fn own_headquarters(&self) -> Option<&'a Headquarters> {
        headquarters_of(self.headquarters, self.player)
    }

    pub fn critical_mass(&self, row: i32, col: i32) -> u32 {
        self.geometry
            .critical_mass(row, col, self.grid.rows(), self.grid.cols())
    }

    pub fn cell(&self, row: i32, col: i32) -> Result<&'a Cell, EngineError> {
        self.grid.try_cell(row, col)
    }

    /// Whether one more atom at `(row, col)` reaches critical mass.
    pub fn would_explode(&self, row: i32, col: i32) -> Result<bool, EngineError> {
        let cell = self.cell(row, col)?;
        Ok(cell.unit_count.saturating_add(1) >= self.critical_mass(row, col))
    }
}

impl std::fmt::Debug for GameView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameView")
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("player", &self.player)
            .field("mode", &self.mode)
            .field("headquarters", &self.headquarters.len())
            .field("power_ups", &self.power_ups.len())
            .finish()
    }
}
