//! Error types for engine operations and the statistics store

use std::fmt;
use std::path::PathBuf;

/// Main error type for engine and store operations
#[derive(Debug)]
pub enum GameError {
    /// Statistics store could not be read or written
    StatsStore {
        /// Path of the store document
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Persisted statistics could not be encoded or decoded
    StatsFormat {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// A date argument was not a valid calendar date
    InvalidDate {
        /// The rejected input
        input: String,
        /// Underlying parse error
        source: chrono::ParseError,
    },

    /// A piece name did not match any catalog entry
    UnknownPiece {
        /// The rejected input
        input: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatsStore {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Statistics store error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::StatsFormat { operation, source } => {
                write!(f, "Statistics format error during {operation}: {source}")
            }
            Self::InvalidDate { input, source } => {
                write!(f, "Invalid date '{input}' (expected YYYY-MM-DD): {source}")
            }
            Self::UnknownPiece { input } => {
                write!(f, "Unknown piece '{input}'")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StatsStore { source, .. } => Some(source),
            Self::StatsFormat { source, .. } => Some(source),
            Self::InvalidDate { source, .. } => Some(source),
            Self::UnknownPiece { .. } => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, GameError>;
