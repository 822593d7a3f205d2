//! Polyomino bitmaps with rotation and anchor utilities
//!
//! Shapes are small 0/1 matrices rotated a quarter turn at a time.
//! Rotation sets are deduplicated by cell pattern, so symmetric pieces
//! carry fewer than four orientations.

use ndarray::Array2;

/// A polyomino bitmap where 1 marks a filled cell
///
/// The matrix is kept exactly as authored, including any empty rows or
/// columns. Trimming would shift anchors and change which rotations
/// count as distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    cells: Array2<u8>,
}

impl Shape {
    /// Construct a shape from row-major bitmap rows
    pub fn from_rows<const C: usize>(rows: &[[u8; C]]) -> Self {
        let cells = Array2::from_shape_fn((rows.len(), C), |(i, j)| {
            rows.get(i).and_then(|row| row.get(j)).copied().unwrap_or(0)
        });
        Self { cells }
    }

    /// Number of rows in the bitmap
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the bitmap
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Test whether the bitmap cell at (row, col) is filled
    ///
    /// Out-of-range positions read as empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(0) == 1
    }

    /// Rotate the bitmap 90 degrees clockwise
    ///
    /// An RxC bitmap becomes CxR with new\[c]\[R-1-r] = old\[r]\[c].
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self {
        let (rows, cols) = self.cells.dim();
        let rotated = Array2::from_shape_fn((cols, rows), |(i, j)| {
            self.cells.get((rows - 1 - j, i)).copied().unwrap_or(0)
        });
        Self { cells: rotated }
    }

    /// First filled cell in row-major order
    ///
    /// Placement targets are interpreted relative to this cell. Falls
    /// back to the top-left corner for an all-empty bitmap.
    pub fn anchor(&self) -> (usize, usize) {
        self.cells
            .indexed_iter()
            .find(|&(_, &value)| value == 1)
            .map_or((0, 0), |(index, _)| index)
    }

    /// Iterate filled cells in row-major order
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 1)
            .map(|(index, _)| index)
    }

    /// Count of filled cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 1).count()
    }
}

/// Generate the distinct clockwise rotations of a base shape
///
/// The base comes first, followed by up to three further quarter turns,
/// each kept only when its bitmap is not already collected.
pub fn generate_rotations(base: &Shape) -> Vec<Shape> {
    let mut rotations = vec![base.clone()];
    let mut current = base.clone();
    for _ in 0..3 {
        current = current.rotate_clockwise();
        if !rotations.contains(&current) {
            rotations.push(current.clone());
        }
    }
    rotations
}
