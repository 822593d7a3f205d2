//! Piece definitions, rotation algebra, and inventory tracking

/// The fixed nine-piece inventory with colors and precomputed rotations
pub mod catalog;
/// Piece membership tracking over the catalog
pub mod set;
/// Polyomino bitmaps with rotation and anchor utilities
pub mod shape;

pub use shape::Shape;
