//! Board mutation for a single move.
//!
//! Moves the piece, removes a captured piece and crowns a man that reaches
//! its promotion row. Turn bookkeeping (counts, chaining, side to move) is
//! left to the caller.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::{Board, Piece};
use crate::move_generation::checkers_move::Move;

/// What one applied move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The piece as it now stands on `to`, crowned if it was promoted.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

pub fn apply_move(board: &mut Board, mv: Move) -> CheckersResult<AppliedMove> {
    let mut piece = board
        .take(mv.from)
        .ok_or(CheckersError::EmptySquare(mv.from))?;

    let captured = mv.captured.and_then(|square| board.take(square));

    let promoted = !piece.king && mv.to.row == piece.color.promotion_row();
    if promoted {
        piece.king = true;
    }

    board.set(mv.to, Some(piece));

    Ok(AppliedMove {
        piece,
        captured,
        promoted,
    })
}
