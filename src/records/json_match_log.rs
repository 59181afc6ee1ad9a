//! Append-only match history stored as one JSON object per line.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use chrono::Utc;

use crate::checkers_errors::CheckersResult;
use crate::records::match_records::{HistoryReader, MatchRecord, MatchRecorder, MatchResult};

#[derive(Debug, Clone)]
pub struct JsonLinesMatchLog {
    path: PathBuf,
}

impl JsonLinesMatchLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> CheckersResult<Vec<MatchRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}

impl MatchRecorder for JsonLinesMatchLog {
    fn record(&mut self, result: &MatchResult) -> CheckersResult<()> {
        let record = MatchRecord::from_result(result, Utc::now());
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl HistoryReader for JsonLinesMatchLog {
    fn recent(&self, limit: usize) -> CheckersResult<Vec<MatchRecord>> {
        let mut records = self.read_all()?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }
}
