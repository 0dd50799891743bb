#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;

use crate::{
    common::{MoveError, Player},
    config::COLS,
    game::{GameSession, GameStatus, TurnOutcome},
};
use log::{debug, warn};

/// Parse a column number typed by a player.
pub fn parse_column(input: &str) -> Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let col: i64 = input
        .parse()
        .map_err(|_| format!("'{}' is not a number", input))?;
    if col < 0 || col >= COLS as i64 {
        return Err(format!("Column {} out of bounds - must be 0-{}", col, COLS - 1));
    }
    Ok(col as usize)
}

/// Print the board followed by a column index footer.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    write!(out, "{}", session.board())?;
    let footer: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
    writeln!(out, "{}", footer.join(" "))
}

/// Interactive hot-seat game between two players sharing one terminal.
pub struct CliGame {
    session: GameSession,
}

impl CliGame {
    pub fn new(first: Player) -> Self {
        Self {
            session: GameSession::new(first),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the prompt loop until somebody wins, the board fills up, or the
    /// input ends. An abandoned game returns [`GameStatus::InProgress`].
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> anyhow::Result<GameStatus> {
        print_board(&mut out, &self.session)?;
        loop {
            let player = self.session.current_player();
            write!(out, "Player {}: ", player)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                debug!("input closed, abandoning game");
                return Ok(self.session.status());
            }

            let col = match parse_column(&line) {
                Ok(col) => col,
                Err(e) => {
                    debug!("rejected input {:?}: {}", line.trim(), e);
                    writeln!(
                        out,
                        "Invalid input! Please enter a number between 0 and {}.",
                        COLS - 1
                    )?;
                    continue;
                }
            };

            match self.session.play_turn(col) {
                Ok(outcome) => {
                    print_board(&mut out, &self.session)?;
                    writeln!(out)?;
                    match outcome {
                        TurnOutcome::Placed { .. } => {}
                        TurnOutcome::Won { player, .. } => {
                            writeln!(out, "Player {}: A winner is you!", player)?;
                            return Ok(self.session.status());
                        }
                        TurnOutcome::Draw { .. } => {
                            writeln!(out, "The board is full. It's a draw!")?;
                            return Ok(self.session.status());
                        }
                    }
                }
                Err(MoveError::ColumnFull) => {
                    writeln!(out, "Column is full! Please choose another column.")?;
                }
                Err(e) => {
                    warn!("move rejected: {}", e);
                    return Err(anyhow::anyhow!(e));
                }
            }
        }
    }
}

impl Default for CliGame {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
