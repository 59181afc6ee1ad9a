//! Core value types shared by every subsystem: sides, pieces, squares and
//! the game mode.

use std::fmt;
use std::str::FromStr;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::BOARD_SIZE;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::snapshot::Snapshot;

/// Side to move. Red starts on rows 5-7 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    White,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// Row delta of a man's forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::White => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::White => (BOARD_SIZE - 1) as u8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single man or king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    #[inline]
    pub const fn man(color: Color) -> Self {
        Self { color, king: false }
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }
}

/// Board square as `(row, col)`, both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Unchecked constructor for literals; callers with untrusted input use
    /// [`Position::try_new`].
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> CheckersResult<Self> {
        if Self::in_bounds(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(CheckersError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub const fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
    }

    /// Only dark squares, where `row + col` is odd, ever hold pieces.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Square reached by stepping `(d_row, d_col)`, or `None` off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        Self::in_bounds(row, col).then(|| Self::new(row as u8, col as u8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Who controls the White side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    PlayerVsAi,
}

impl GameMode {
    /// Side played by the engine, if any. The human always plays Red.
    #[inline]
    pub const fn ai_color(self) -> Option<Color> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsAi => Some(Color::White),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "pvp",
            GameMode::PlayerVsAi => "ai",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PlayerVsPlayer),
            "ai" | "pvai" => Ok(GameMode::PlayerVsAi),
            _ => Err(CheckersError::InvalidOption {
                option: "mode".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}
