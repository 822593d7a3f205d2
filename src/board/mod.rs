//! Board state, placement legality, and completion detection

/// Board coordinates and cell states
pub mod grid;
/// Board state with placement legality and value-returning mutation
pub mod placement;
/// Completion detection over the full board
pub mod win;

pub use grid::{Cell, Coord};
pub use placement::Board;
