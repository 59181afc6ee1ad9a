use std::fmt;

use crate::game_state::checkers_types::Position;

/// One diagonal step or one capture.
///
/// A jump lands exactly two diagonal steps from `from` and carries the square
/// of the opposing piece it leaps over; a plain step carries no capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Position>,
}

impl Move {
    #[inline]
    pub const fn step(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    #[inline]
    pub const fn jump(from: Position, to: Position, captured: Position) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[inline]
    pub const fn is_jump(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
