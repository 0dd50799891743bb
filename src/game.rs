use crate::{
    board::Board,
    common::{MoveError, Player},
};
use log::info;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// What a successful turn did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Piece placed, play passes to the other player.
    Placed { row: usize, col: usize },
    /// Piece placed and completed a winning line.
    Won { player: Player, row: usize, col: usize },
    /// Piece placed in the last free cell without a winner.
    Draw { row: usize, col: usize },
}

/// One game: the board, whose turn it is, and how the game stands.
pub struct GameSession {
    board: Board,
    current: Player,
    status: GameStatus,
}

impl GameSession {
    /// Start a game on an empty board with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            current: first,
            status: GameStatus::InProgress,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of pieces placed so far.
    pub fn moves(&self) -> usize {
        self.board.move_count()
    }

    /// Play the current player's piece into `col`.
    ///
    /// A rejected move leaves the board and the active player unchanged,
    /// so the same player simply tries again.
    pub fn play_turn(&mut self, col: usize) -> Result<TurnOutcome, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        let player = self.current;
        let row = self.board.place_move(player, col)?;

        if let Some(winner) = self.board.check_winner(player, row, col) {
            info!("player {} won after {} moves", winner, self.moves());
            self.status = GameStatus::Won(winner);
            return Ok(TurnOutcome::Won {
                player: winner,
                row,
                col,
            });
        }
        if self.board.is_full() {
            info!("board full after {} moves, draw", self.moves());
            self.status = GameStatus::Draw;
            return Ok(TurnOutcome::Draw { row, col });
        }
        self.current = player.other();
        Ok(TurnOutcome::Placed { row, col })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
