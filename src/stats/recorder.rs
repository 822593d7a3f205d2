//! Completion recording over an injectable storage backend

use crate::io::error::{GameError, Result};
use crate::stats::record::{DailyStats, PuzzleCompletion};
use crate::stats::store::StatsBackend;
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;

/// Map of puzzle number to that day's record
pub type StatsTable = BTreeMap<i64, DailyStats>;

/// Records and queries puzzle completions
///
/// Every operation is a full round trip through the backend; there is
/// no in-memory cache to fall out of sync. Reads degrade to an empty
/// table when the store is missing or unreadable; writes surface their
/// errors.
pub struct StatsRecorder {
    backend: Box<dyn StatsBackend>,
}

impl StatsRecorder {
    /// Create a recorder over the given backend
    pub fn new(backend: Box<dyn StatsBackend>) -> Self {
        Self { backend }
    }

    /// Read the whole table, empty when missing or unreadable
    pub fn all(&self) -> StatsTable {
        self.backend
            .load()
            .ok()
            .flatten()
            .and_then(|document| serde_json::from_str(&document).ok())
            .unwrap_or_default()
    }

    /// Record a completion of a daily puzzle
    ///
    /// Appends a completion stamped with the current UTC time and keeps
    /// the day's best time as the minimum over all completions.
    ///
    /// # Errors
    ///
    /// Returns an error when the updated table cannot be encoded or the
    /// backend write fails.
    pub fn record_completion(&mut self, puzzle_number: i64, time_ms: u64) -> Result<()> {
        let completion = PuzzleCompletion {
            puzzle_number,
            time_ms,
            completed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let mut table = self.all();
        match table.get_mut(&puzzle_number) {
            Some(day) => day.add(completion),
            None => {
                table.insert(puzzle_number, DailyStats::from_first(completion));
            }
        }

        let document = serde_json::to_string(&table).map_err(|source| GameError::StatsFormat {
            operation: "encode",
            source,
        })?;
        self.backend.save(&document)
    }

    /// Fastest recorded time for a puzzle, `None` when never completed
    pub fn best_time(&self, puzzle_number: i64) -> Option<u64> {
        self.all().get(&puzzle_number).map(|day| day.best_time)
    }

    /// Number of recorded completions for a puzzle
    pub fn attempt_count(&self, puzzle_number: i64) -> usize {
        self.all()
            .get(&puzzle_number)
            .map_or(0, DailyStats::attempt_count)
    }

    /// Full record for a puzzle, `None` when never completed
    pub fn day_stats(&self, puzzle_number: i64) -> Option<DailyStats> {
        self.all().get(&puzzle_number).cloned()
    }

    /// Count of distinct puzzles with at least one completion
    pub fn completed_puzzles(&self) -> usize {
        self.all().len()
    }

    /// Delete all recorded statistics
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot delete the store.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.clear()
    }
}
