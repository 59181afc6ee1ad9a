//! Undo/redo over whole turns.
//!
//! A snapshot is pushed when a fresh turn starts (never mid-chain), and any
//! new turn invalidates the redo stack. In AI mode one undo steps back over
//! the AI's reply as well, so the human lands on their own turn again. Redo
//! always moves forward a single snapshot.

use crate::game_state::checkers_types::{GameState, Snapshot};

#[derive(Debug, Default, Clone)]
pub struct HistoryManager {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the state a new turn starts from and forgets redo history.
    pub fn record_turn_start(&mut self, state: &GameState) {
        self.undo_stack.push(state.snapshot());
        self.redo_stack.clear();
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Restores the previous turn. Returns `false` when there is nothing to
    /// undo.
    pub fn undo(&mut self, state: &mut GameState) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(state.snapshot());
        state.restore(previous);

        // Landed on the AI's turn: step back over the human move too.
        if state.is_ai_turn() {
            if let Some(before_human) = self.undo_stack.pop() {
                self.redo_stack.push(state.snapshot());
                state.restore(before_human);
            }
        }
        true
    }

    /// Re-applies the most recently undone snapshot. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self, state: &mut GameState) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(state.snapshot());
        state.restore(next);
        true
    }
}
