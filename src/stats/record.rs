//! Persisted completion records and their wire format
//!
//! Field names serialize in camelCase so existing stored documents keep
//! loading across versions.

use serde::{Deserialize, Serialize};

/// One recorded completion of a daily puzzle
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleCompletion {
    /// Which daily puzzle was completed
    pub puzzle_number: i64,
    /// Solve time in milliseconds
    pub time_ms: u64,
    /// Completion instant as an RFC 3339 timestamp
    pub completed_at: String,
}

/// All recorded completions for one daily puzzle
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    /// Fastest completion in milliseconds
    pub best_time: u64,
    /// Every completion in recording order
    pub completions: Vec<PuzzleCompletion>,
}

impl DailyStats {
    /// Start a day's record from its first completion
    pub fn from_first(completion: PuzzleCompletion) -> Self {
        Self {
            best_time: completion.time_ms,
            completions: vec![completion],
        }
    }

    /// Fold another completion into the record
    pub fn add(&mut self, completion: PuzzleCompletion) {
        self.best_time = self.best_time.min(completion.time_ms);
        self.completions.push(completion);
    }

    /// Number of recorded completions
    pub fn attempt_count(&self) -> usize {
        self.completions.len()
    }
}
