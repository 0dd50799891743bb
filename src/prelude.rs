//! Commonly used types for ease of import.

pub use crate::{Board, Cell, GameSession, GameStatus, MoveError, Player, TurnOutcome};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliGame};
