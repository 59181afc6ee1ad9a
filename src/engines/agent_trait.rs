//! Agent abstraction for the automated side.
//!
//! The session hands an agent the already-filtered legal set (a whole side's
//! moves, or the continuation jumps of a chain) and plays whatever it picks.

use crate::move_generation::checkers_move::Move;

pub trait Agent: Send {
    fn name(&self) -> &str;

    /// Called at the start of every game with the session seed. Seeded
    /// agents restart their sequence from it.
    fn new_game(&mut self, _seed: Option<u64>) {}

    /// Pick one of `legal_moves`, or `None` when the slice is empty.
    fn choose_move(&mut self, legal_moves: &[Move]) -> Option<Move>;
}
