//! The 8x8 grid of optional pieces.
//!
//! `Board` is plain data: it bounds-checks positions and nothing more.
//! Legality belongs to the move generator.

use crate::game_state::checkers_rules::{BOARD_SIZE, RED_START_ROWS, WHITE_START_ROWS};
use crate::game_state::checkers_types::{Color, Piece, Position};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard opening layout: White men on the playable squares of rows
    /// 0-2, Red men on rows 5-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Position::new(row, col);
                if !pos.is_playable() {
                    continue;
                }
                if WHITE_START_ROWS.contains(&row) {
                    board.set(pos, Some(Piece::man(Color::White)));
                } else if RED_START_ROWS.contains(&row) {
                    board.set(pos, Some(Piece::man(Color::Red)));
                }
            }
        }
        board
    }

    #[inline]
    pub fn is_on_board(row: i8, col: i8) -> bool {
        Position::in_bounds(row, col)
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.cells
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .flatten()
    }

    /// Writes one cell. Out-of-range positions are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if let Some(cell) = self
            .cells
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))
        {
            *cell = piece;
        }
    }

    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        let piece = self.get(pos);
        self.set(pos, None);
        piece
    }

    /// Every occupied square, scanned row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Position::new(row as u8, col as u8), piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, color: Color) -> u8 {
        self.pieces_of(color).count() as u8
    }
}
