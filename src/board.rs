//! Game board state: a fixed grid with column gravity and win detection.

use crate::common::{Cell, MoveError, Player};
use crate::config::{COLS, ROWS, WIN_LENGTH};
use core::fmt;
use log::{debug, trace};

/// Direction vectors (row delta, col delta) scanned by `check_winner`.
/// Each is walked both ways, so the opposite vectors are implied.
const DIRECTIONS: [(isize, isize); 4] = [
    // horizontal
    (0, 1),
    // vertical
    (1, 0),
    // falling diagonal, top-left to bottom-right
    (1, 1),
    // rising diagonal, bottom-left to top-right
    (-1, 1),
];

/// A 6×7 grid. Row 0 is the top, row `ROWS - 1` the bottom.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    moves: usize,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            moves: 0,
        }
    }

    /// Cell at (row, col), or `None` when the coordinate is off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Number of successful moves applied so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Number of occupied cells in `col`. Out-of-range columns report zero.
    pub fn column_height(&self, col: usize) -> usize {
        if col >= COLS {
            return 0;
        }
        (0..ROWS)
            .rev()
            .take_while(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Returns `true` when `col` cannot take another piece.
    /// Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || self.cells[0][col] != Cell::Empty
    }

    /// Returns `true` once every column is full.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, left to right.
    pub fn available_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Drop `player`'s piece into `col` and return the row where it landed.
    ///
    /// A full column leaves the board untouched and yields
    /// [`MoveError::ColumnFull`]; the caller must not use a row from a
    /// failed move for further queries.
    pub fn place_move(&mut self, player: Player, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = player.to_cell();
                self.moves += 1;
                trace!("player {} placed at ({}, {})", player, row, col);
                return Ok(row);
            }
        }
        debug!("player {} tried full column {}", player, col);
        Err(MoveError::ColumnFull)
    }

    /// Returns `Some(player)` if the mark at (row, col) completes a run of
    /// at least `WIN_LENGTH` in any direction, otherwise `None`.
    ///
    /// Coordinates off the grid, or cells not holding `player`'s mark,
    /// yield `None`.
    pub fn check_winner(&self, player: Player, row: usize, col: usize) -> Option<Player> {
        if self.get(row, col)? != player.to_cell() {
            return None;
        }
        let wins = DIRECTIONS.iter().any(|&(dr, dc)| {
            let total = 1
                + self.run_length(player, row, col, dr, dc)
                + self.run_length(player, row, col, -dr, -dc);
            total >= WIN_LENGTH
        });
        if wins {
            debug!("player {} wins at ({}, {})", player, row, col);
            Some(player)
        } else {
            None
        }
    }

    /// Consecutive `player` marks starting one step from (row, col) along
    /// (dr, dc). The start cell itself is not counted.
    fn run_length(&self, player: Player, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let mark = player.to_cell();
        let mut count = 0;
        let (mut r, mut c) = (row, col);
        loop {
            r = match r.checked_add_signed(dr) {
                Some(r) => r,
                None => break,
            };
            c = match c.checked_add_signed(dc) {
                Some(c) => c,
                None => break,
            };
            if self.get(r, c) != Some(mark) {
                break;
            }
            count += 1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text dump of the grid, top row first, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ moves: {} }}", self.moves)?;
        write!(f, "{}", self)
    }
}
