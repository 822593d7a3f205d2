//! Daily polyomino puzzle engine with deterministic boards and local statistics
//!
//! Rolls seven blockers onto a 6x6 board (the same layout for every player on
//! a given date), validates and applies polyomino placements, detects
//! completed boards, and keeps per-puzzle completion statistics on local disk.

#![forbid(unsafe_code)]

/// Board state, placement legality, and completion detection
pub mod board;
/// Deterministic dice rolls and daily puzzle scheduling
pub mod dice;
/// Game orchestration over boards, pieces, and statistics
pub mod game;
/// Input/output, configuration, and error handling
pub mod io;
/// Piece definitions, rotation algebra, and inventory tracking
pub mod pieces;
/// Completion statistics with pluggable persistence
pub mod stats;

pub use io::error::{GameError, Result};
