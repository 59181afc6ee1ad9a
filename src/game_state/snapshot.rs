use crate::game_state::checkers_types::*;

/// History record taken before a turn begins.
///
/// Owns a structural copy of the board, never a reference into live state,
/// and deliberately omits selection, legal moves and the chaining flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Color,
    pub red_count: u8,
    pub white_count: u8,
    pub game_over: bool,
    pub winner: Option<Color>,
}
