use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::checkers_errors::CheckersResult;
use crate::records::match_records::{HistoryReader, MatchRecord, MatchRecorder, MatchResult};

/// In-process match log. Clones share the same storage, so one handle can be
/// given to a session while another reads the history back.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMatchLog {
    records: Arc<Mutex<Vec<MatchRecord>>>,
}

impl InMemoryMatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MatchRecorder for InMemoryMatchLog {
    fn record(&mut self, result: &MatchResult) -> CheckersResult<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(MatchRecord::from_result(result, Utc::now()));
        Ok(())
    }
}

impl HistoryReader for InMemoryMatchLog {
    fn recent(&self, limit: usize) -> CheckersResult<Vec<MatchRecord>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.iter().rev().take(limit).cloned().collect())
    }
}
