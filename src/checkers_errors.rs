//! Errors used throughout the draughts engine.
//!
//! `CheckersError` is the single error type across the crate. Rule violations
//! coming from the programmatic API (`GameSession::play_move`) carry the
//! offending move or square so callers can report them; the click-driven API
//! never surfaces them and treats illegal input as a no-op instead.
//!
//! Match recording failures are represented here too, but the session only
//! logs them: a recorder that cannot write never blocks or corrupts a game.

use thiserror::Error;

use crate::game_state::checkers_types::{Color, Position};
use crate::move_generation::checkers_move::Move;

/// Unified error type for the draughts engine.
#[derive(Error, Debug)]
pub enum CheckersError {
    /// Row or column outside `0..8`.
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    /// No piece on the square a move starts from.
    #[error("no piece on {0}")]
    EmptySquare(Position),

    /// The move is not in the legal set for the current turn.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// A human action was attempted while the automated side is to move.
    #[error("it is {0}'s turn and that side is played by the AI")]
    AiToMove(Color),

    /// Any action after the game has been decided.
    #[error("the game is already over")]
    GameOver,

    /// Text that could not be read as a square or move.
    #[error("invalid notation '{0}'")]
    InvalidNotation(String),

    /// Malformed ASCII board diagram.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// Configuration value that does not parse.
    #[error("invalid value '{value}' for option {option}")]
    InvalidOption { option: String, value: String },

    #[error("match record i/o failed: {0}")]
    RecordIo(#[from] std::io::Error),

    #[error("match record encoding failed: {0}")]
    RecordFormat(#[from] serde_json::Error),
}

/// Result alias for draughts engine operations.
pub type CheckersResult<T> = Result<T, CheckersError>;
