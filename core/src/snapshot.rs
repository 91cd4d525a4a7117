use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Largest value the three-digit header counters can show.
pub const DISPLAY_MAX: u16 = 999;

/// Clamps a counter into the `0..=999` display range.
pub fn clamp_display(value: i64) -> u16 {
    value.clamp(0, DISPLAY_MAX.into()) as u16
}

/// Read-only copy of a board for drawing one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub cells: Array2<Cell>,
    pub phase: Phase,
    /// Mines minus flags, clamped for display.
    pub mines_left: u16,
    /// Live while playing, frozen once the game ended, clamped for display.
    pub elapsed_secs: u16,
    pub triggered_mine: Option<CellIndex>,
}

impl Snapshot {
    pub fn from_board<G: MineLayoutGenerator>(board: &Board<G>, now: DateTime<Utc>) -> Self {
        Self {
            size: board.size(),
            cells: board.grid().cells().clone(),
            phase: board.phase(),
            mines_left: clamp_display(board.mines_left() as i64),
            elapsed_secs: clamp_display(board.elapsed_secs_at(now).into()),
            triggered_mine: board.triggered_mine(),
        }
    }

    pub fn cell(&self, index: CellIndex) -> &Cell {
        let coords = to_coords(index, self.size.1);
        &self.cells[coords.to_nd_index()]
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Cell)> {
        self.cells.iter().enumerate()
    }
}
