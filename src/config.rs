pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of an unbroken run that wins the game.
pub const WIN_LENGTH: usize = 4;

/// Total number of cells; a game without a winner ends after this many moves.
pub const TOTAL_CELLS: usize = ROWS * COLS;
