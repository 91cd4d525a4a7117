use serde::{Deserialize, Serialize};

/// What a cell holds, fixed once the mines for a game are placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Number(u8),
    Mine,
}

impl CellContent {
    /// Content of a non-mine cell with `count` adjacent mines.
    pub const fn from_count(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Number(count)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent mine count, `None` for a mine.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Number(count) => Some(count),
            Self::Mine => None,
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty
    }
}

/// Styling hint left by the end-of-game sweep after a loss.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndMark {
    /// The mine whose reveal ended the game.
    TriggeredMine,
    /// Any other mine that was not flagged.
    Mine,
    /// A flag placed on a cell without a mine.
    WrongFlag,
    /// A numbered cell the player never opened.
    MissedNumber,
}

/// One grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    pub revealed: bool,
    pub flagged: bool,
    pub end_mark: Option<EndMark>,
}

impl Cell {
    /// Whether a reveal command on this cell would be accepted.
    pub const fn is_revealable(&self) -> bool {
        !self.revealed && !self.flagged
    }

    pub const fn is_mine(&self) -> bool {
        self.content.is_mine()
    }
}
