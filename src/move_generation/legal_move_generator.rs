//! Legal move generation with forced captures.
//!
//! A man steps or jumps along its two forward diagonals, a king along all
//! four. Across a whole side, any available jump removes every plain step
//! from the result, so a piece with only steps becomes unselectable while
//! another piece of the same color can capture.

use crate::game_state::checkers_rules::KING_DIRECTIONS;
use crate::game_state::checkers_types::{Board, Color, Piece, Position};
use crate::move_generation::checkers_move::Move;
use crate::move_generation::move_generator::MoveGenerator;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn moves_for_piece(&self, board: &Board, from: Position, piece: Piece) -> Vec<Move> {
        let mut out = Vec::with_capacity(4);
        push_piece_moves(board, from, piece, &mut out);
        out
    }

    fn moves_for_side(&self, board: &Board, color: Color) -> Vec<Move> {
        let mut steps = Vec::<Move>::with_capacity(32);
        let mut jumps = Vec::<Move>::new();

        for (from, piece) in board.pieces_of(color) {
            let mut raw = Vec::with_capacity(4);
            push_piece_moves(board, from, piece, &mut raw);
            for mv in raw {
                if mv.is_jump() {
                    jumps.push(mv);
                } else {
                    steps.push(mv);
                }
            }
        }

        if jumps.is_empty() {
            steps
        } else {
            jumps
        }
    }
}

/// Diagonal directions a piece may travel in.
#[inline]
pub fn directions_for(piece: Piece) -> &'static [(i8, i8)] {
    const RED_MAN: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
    const WHITE_MAN: [(i8, i8); 2] = [(1, -1), (1, 1)];

    if piece.king {
        &KING_DIRECTIONS
    } else {
        match piece.color {
            Color::Red => &RED_MAN,
            Color::White => &WHITE_MAN,
        }
    }
}

fn push_piece_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<Move>) {
    for &(d_row, d_col) in directions_for(piece) {
        let Some(adjacent) = from.offset(d_row, d_col) else {
            continue;
        };

        match board.get(adjacent) {
            None => out.push(Move::step(from, adjacent)),
            Some(other) if other.color != piece.color => {
                let Some(landing) = adjacent.offset(d_row, d_col) else {
                    continue;
                };
                if board.get(landing).is_none() {
                    out.push(Move::jump(from, landing, adjacent));
                }
            }
            Some(_) => {}
        }
    }
}
