//! Completion statistics with pluggable persistence

/// Persisted completion records and their wire format
pub mod record;
/// Completion recording over an injectable storage backend
pub mod recorder;
/// Result formatting for sharing completions
pub mod share;
/// Storage backends for the statistics document
pub mod store;

pub use recorder::StatsRecorder;
