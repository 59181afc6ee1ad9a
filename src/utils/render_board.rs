//! Terminal board renderer for the text protocol and diagnostics.

use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Board, Position};
use crate::move_generation::checkers_move::Move;
use crate::utils::board_layout::piece_to_char;

/// Render the board with row and column indices. Destination squares of
/// `highlights` are marked with `*`.
pub fn render_board(board: &Board, highlights: &[Move]) -> String {
    let mut out = String::from("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE as u8 {
        out.push(char::from(b'0' + row));
        for col in 0..BOARD_SIZE as u8 {
            let pos = Position::new(row, col);
            out.push(' ');
            out.push(match board.get(pos) {
                Some(piece) => piece_to_char(piece),
                None if highlights.iter().any(|mv| mv.to == pos) => '*',
                None if pos.is_playable() => '.',
                None => ' ',
            });
        }
        out.push('\n');
    }

    out
}
