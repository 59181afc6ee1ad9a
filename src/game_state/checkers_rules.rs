//! Rule constants for 8x8 English draughts.

pub const BOARD_SIZE: usize = 8;

/// Men each side starts with.
pub const PIECES_PER_SIDE: u8 = 12;

/// Rows initially filled by White; Red fills the mirrored rows 5..8.
pub const WHITE_START_ROWS: std::ops::Range<u8> = 0..3;
pub const RED_START_ROWS: std::ops::Range<u8> = 5..8;

/// All four diagonal steps, used by kings.
pub const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
