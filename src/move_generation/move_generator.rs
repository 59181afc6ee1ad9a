use crate::game_state::checkers_types::{Board, Color, Piece, Position};
use crate::move_generation::checkers_move::Move;

/// Move enumeration over a board.
///
/// `moves_for_piece` is raw geometry for one piece; `moves_for_side` applies
/// the mandatory-capture filter across the whole side.
pub trait MoveGenerator: Send + Sync {
    fn moves_for_piece(&self, board: &Board, from: Position, piece: Piece) -> Vec<Move>;

    fn moves_for_side(&self, board: &Board, color: Color) -> Vec<Move>;

    /// Jumps available to `piece` standing on `from`, used to continue a chain.
    fn jump_continuations(&self, board: &Board, from: Position, piece: Piece) -> Vec<Move> {
        self.moves_for_piece(board, from, piece)
            .into_iter()
            .filter(Move::is_jump)
            .collect()
    }

    fn has_any_move(&self, board: &Board, color: Color) -> bool {
        !self.moves_for_side(board, color).is_empty()
    }
}
