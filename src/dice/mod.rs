//! Deterministic dice rolls and daily puzzle scheduling

/// Calendar plumbing for daily puzzles
pub mod calendar;
/// Deterministic fraction generator for daily boards
pub mod rng;
/// Blocker rolls producing seven unique board positions
pub mod roll;
