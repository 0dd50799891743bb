//! Common types for Connect Four: cells, players and move errors.

use core::fmt;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerX,
    PlayerO,
}

impl Cell {
    /// Glyph used when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::PlayerX => 'x',
            Cell::PlayerO => 'o',
        }
    }

    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerX => Some(Player::X),
            Cell::PlayerO => Some(Player::O),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// One of the two players. "Nobody" is expressed as `Option::<Player>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark this player leaves in the grid.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::PlayerX,
            Player::O => Cell::PlayerO,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Errors returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Every row of the chosen column is occupied.
    ColumnFull,
    /// Column index is outside the grid.
    InvalidColumn,
    /// The game already has a winner or ended in a draw.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::ColumnFull => write!(f, "Column is full"),
            MoveError::InvalidColumn => write!(f, "Column is out of range"),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
