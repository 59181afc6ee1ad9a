//! Live game state for one session.
//!
//! Holds the board and the scalar turn fields that history snapshots, plus the
//! transient selection / chain-jump fields that are never snapshotted.

use crate::game_state::checkers_rules::PIECES_PER_SIDE;
use crate::game_state::checkers_types::*;
use crate::move_generation::checkers_move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub red_count: u8,
    pub white_count: u8,
    pub game_over: bool,
    pub winner: Option<Color>,

    // --- Transient turn state ---
    pub selected: Option<Position>,
    pub legal_moves: Vec<Move>,
    /// Mid multi-jump: the selected piece must keep capturing.
    pub chaining: bool,

    pub mode: GameMode,
}

impl GameState {
    pub fn new_game(mode: GameMode) -> Self {
        Self {
            board: Board::initial(),
            turn: Color::Red,
            red_count: PIECES_PER_SIDE,
            white_count: PIECES_PER_SIDE,
            game_over: false,
            winner: None,
            selected: None,
            legal_moves: Vec::new(),
            chaining: false,
            mode,
        }
    }

    /// State for an arbitrary position with `turn` to move. Piece counts are
    /// taken from the board.
    pub fn from_board(board: Board, turn: Color, mode: GameMode) -> Self {
        Self {
            red_count: board.count(Color::Red),
            white_count: board.count(Color::White),
            board,
            turn,
            game_over: false,
            winner: None,
            selected: None,
            legal_moves: Vec::new(),
            chaining: false,
            mode,
        }
    }

    #[inline]
    pub fn count(&self, color: Color) -> u8 {
        match color {
            Color::Red => self.red_count,
            Color::White => self.white_count,
        }
    }

    #[inline]
    pub fn count_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::Red => &mut self.red_count,
            Color::White => &mut self.white_count,
        }
    }

    /// True when `turn` belongs to the engine-controlled side.
    #[inline]
    pub fn is_ai_turn(&self) -> bool {
        self.mode.ai_color() == Some(self.turn)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_moves.clear();
        self.chaining = false;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            turn: self.turn,
            red_count: self.red_count,
            white_count: self.white_count,
            game_over: self.game_over,
            winner: self.winner,
        }
    }

    /// Replaces the historical fields and drops any selection or chain.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.red_count = snapshot.red_count;
        self.white_count = snapshot.white_count;
        self.game_over = snapshot.game_over;
        self.winner = snapshot.winner;
        self.clear_selection();
    }
}
