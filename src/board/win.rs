//! Completion detection over the full board

use crate::board::placement::Board;

impl Board {
    /// Test whether every cell is blocked or occupied
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_covered())
    }

    /// Count cells still needing a piece
    ///
    /// Zero exactly when the board is solved.
    pub fn remaining_spaces(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }
}
