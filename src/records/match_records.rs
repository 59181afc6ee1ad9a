//! Completed-game records and the two collaborator seams around them.
//!
//! The session reports each finished game to a `MatchRecorder` exactly once.
//! A `HistoryReader` returns recent records for display; nothing in the rules
//! engine depends on what it returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checkers_errors::CheckersResult;
use crate::game_state::checkers_types::{Color, GameMode};

/// Outcome handed to the recorder when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Color,
    pub mode: GameMode,
}

/// Stored form of a finished game, as returned by a `HistoryReader`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_name: String,
    pub mode: String,
    pub timestamp: DateTime<Utc>,
}

impl MatchRecord {
    pub fn from_result(result: &MatchResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            winner_name: result.winner.name().to_owned(),
            mode: result.mode.as_str().to_owned(),
            timestamp,
        }
    }
}

pub trait MatchRecorder: Send {
    fn record(&mut self, result: &MatchResult) -> CheckersResult<()>;
}

pub trait HistoryReader {
    /// Up to `limit` records, newest first.
    fn recent(&self, limit: usize) -> CheckersResult<Vec<MatchRecord>>;
}

/// Recorder for sessions that keep no history.
#[derive(Debug, Default)]
pub struct NullRecorder;

impl MatchRecorder for NullRecorder {
    fn record(&mut self, _result: &MatchResult) -> CheckersResult<()> {
        Ok(())
    }
}
