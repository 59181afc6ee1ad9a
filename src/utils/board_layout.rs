//! ASCII board diagrams.
//!
//! Eight rows of eight cells, row 0 first: `.` empty, `r`/`w` men, `R`/`W`
//! kings. Whitespace is ignored, so diagrams can be indented inside string
//! literals. Pieces are only allowed on playable (dark) squares.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Board, Color, Piece, Position};

pub fn parse_layout(diagram: &str) -> CheckersResult<Board> {
    let cells: Vec<char> = diagram.chars().filter(|ch| !ch.is_whitespace()).collect();
    if cells.len() != BOARD_SIZE * BOARD_SIZE {
        return Err(CheckersError::InvalidLayout(format!(
            "expected {} cells, found {}",
            BOARD_SIZE * BOARD_SIZE,
            cells.len()
        )));
    }

    let mut board = Board::empty();
    for (idx, ch) in cells.into_iter().enumerate() {
        let pos = Position::new((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8);
        let piece = match ch {
            '.' => continue,
            'r' => Piece::man(Color::Red),
            'w' => Piece::man(Color::White),
            'R' => Piece::king(Color::Red),
            'W' => Piece::king(Color::White),
            other => {
                return Err(CheckersError::InvalidLayout(format!(
                    "unknown cell '{other}' at {pos}"
                )))
            }
        };
        if !pos.is_playable() {
            return Err(CheckersError::InvalidLayout(format!(
                "piece on light square {pos}"
            )));
        }
        board.set(pos, Some(piece));
    }

    Ok(board)
}

pub fn piece_to_char(piece: Piece) -> char {
    match (piece.color, piece.king) {
        (Color::Red, false) => 'r',
        (Color::Red, true) => 'R',
        (Color::White, false) => 'w',
        (Color::White, true) => 'W',
    }
}
