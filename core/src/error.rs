use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {index} is outside a board of {cells} cells")]
    InvalidIndex { index: usize, cells: usize },
    #[error("Too many mines, {requested} requested but only {fits} fit")]
    TooManyMines { requested: CellCount, fits: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
