//! Minesweeper board engine with lazy mine placement around a safe first
//! click and flood-fill reveal.
//!
//! Drawing and input handling live in the host; it drives a [`Board`] with
//! commands and reads a [`Snapshot`] back each frame.

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use counter::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod counter;
mod difficulty;
mod engine;
mod error;
mod generator;
mod grid;
mod reveal;
mod snapshot;
mod types;

/// Cells kept mine-free around the first reveal, the origin plus its 8 neighbors.
pub const SAFE_ZONE_CELLS: CellCount = 9;

/// Board dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps both dimensions to at least one cell and the mine count so a
    /// full safe zone always fits.
    pub fn new((rows, cols): Coord2, mines: CellCount) -> Self {
        let size = (rows.max(1), cols.max(1));
        let max_mines = Self::max_mines(size);
        if mines > max_mines {
            log::warn!(
                "Clamping mine count for {}x{} board, requested {} but only {} fit",
                size.0,
                size.1,
                mines,
                max_mines
            );
        }
        Self::new_unchecked(size, mines.min(max_mines))
    }

    /// Like [`GameConfig::new`] but refuses a mine count that would need clamping.
    pub fn checked((rows, cols): Coord2, mines: CellCount) -> Result<Self> {
        let size = (rows.max(1), cols.max(1));
        let fits = Self::max_mines(size);
        if mines > fits {
            return Err(GameError::TooManyMines {
                requested: mines,
                fits,
            });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// Derives the mine count from the cell count alone.
    ///
    /// Kept for boards sized without a difficulty: the classic 81, 256 and
    /// 480 cell boards map to 10, 40 and 99 mines, anything else gets 15%.
    /// Boards built through [`Difficulty`] never take this path.
    pub fn from_size(size: Coord2) -> Self {
        let cells = mult(size.0.max(1), size.1.max(1));
        let mines = match cells {
            81 => 10,
            256 => 40,
            480 => 99,
            _ => (f32::from(cells) * 0.15).round() as CellCount,
        };
        Self::new(size, mines)
    }

    /// Largest mine count that still leaves room for the safe zone.
    pub const fn max_mines(size: Coord2) -> CellCount {
        mult(size.0, size.1).saturating_sub(SAFE_ZONE_CELLS)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a reveal command.
///
/// Ignored reveals (flagged or already revealed cells, or any reveal after
/// the game ended) report `Continue`. Use [`Board::can_reveal`] to tell them
/// apart beforehand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Continue,
    GameOver,
    Win,
}

impl RevealOutcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::GameOver | Self::Win)
    }
}
