//! Perft node counting over complete turns.
//!
//! A turn is one plain step or a whole chain of jumps by the same piece, so a
//! double jump counts as one node. Leaf turns are further classified by
//! captures, promotions and multi-jumps.

use crate::checkers_errors::CheckersResult;
use crate::game_state::checkers_types::{Board, Color};
use crate::move_generation::checkers_move::Move;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub multi_jumps: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.multi_jumps += rhs.multi_jumps;
    }
}

/// Every move sequence one side can play as a single turn.
#[derive(Debug, Clone)]
pub struct CompletedTurn {
    pub moves: Vec<Move>,
    pub board_after: Board,
    pub promoted: bool,
}

impl CompletedTurn {
    pub fn captures(&self) -> usize {
        self.moves.iter().filter(|mv| mv.is_jump()).count()
    }
}

pub fn complete_turns<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
) -> CheckersResult<Vec<CompletedTurn>> {
    let mut out = Vec::new();
    for mv in generator.moves_for_side(board, color) {
        extend_turn(generator, board.clone(), mv, Vec::new(), &mut out)?;
    }
    Ok(out)
}

fn extend_turn<G: MoveGenerator>(
    generator: &G,
    mut board: Board,
    mv: Move,
    mut path: Vec<Move>,
    out: &mut Vec<CompletedTurn>,
) -> CheckersResult<()> {
    let applied = apply_move(&mut board, mv)?;
    path.push(mv);

    if mv.is_jump() && !applied.promoted {
        let continuations = generator.jump_continuations(&board, mv.to, applied.piece);
        if !continuations.is_empty() {
            for next in continuations {
                extend_turn(generator, board.clone(), next, path.clone(), out)?;
            }
            return Ok(());
        }
    }

    out.push(CompletedTurn {
        moves: path,
        board_after: board,
        promoted: applied.promoted,
    });
    Ok(())
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    to_move: Color,
    depth: u8,
) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for turn in complete_turns(generator, board, to_move)? {
        if depth == 1 {
            let captures = turn.captures();
            total.merge(PerftCounts {
                nodes: 1,
                captures: usize::from(captures > 0),
                promotions: usize::from(turn.promoted),
                multi_jumps: usize::from(captures > 1),
            });
        } else {
            total.merge(perft(generator, &turn.board_after, to_move.opposite(), depth - 1)?);
        }
    }

    Ok(total)
}
