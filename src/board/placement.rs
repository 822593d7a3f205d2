//! Board state with placement legality and value-returning mutation
//!
//! Boards are values. Mutating operations return a new board and leave
//! the receiver untouched, so a failed placement never needs rollback.

use crate::board::grid::{Cell, Coord};
use crate::io::configuration::BOARD_SIZE;
use crate::pieces::catalog::PieceKind;
use crate::pieces::set::PieceSet;
use crate::pieces::shape::Shape;
use ndarray::Array2;

/// The 6x6 playing field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: Array2::from_elem((BOARD_SIZE, BOARD_SIZE), Cell::Empty),
        }
    }

    /// Create a board with the given blocker positions
    ///
    /// Out-of-bounds positions are ignored.
    pub fn with_blocked(blocked: &[Coord]) -> Self {
        let mut board = Self::new();
        for coord in blocked {
            if let Some(cell) = board.cells.get_mut((coord.row, coord.col)) {
                *cell = Cell::Blocked;
            }
        }
        board
    }

    /// Cell contents at a coordinate, `None` off the board
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells.get((coord.row, coord.col)).copied()
    }

    // Translate the shape so its anchor lands on target, None when any
    // filled cell falls off the board
    fn footprint(shape: &Shape, target: Coord) -> Option<Vec<Coord>> {
        let (anchor_row, anchor_col) = shape.anchor();
        let mut cells = Vec::with_capacity(shape.cell_count());
        for (row, col) in shape.filled_cells() {
            let board_row = target.row as i64 + row as i64 - anchor_row as i64;
            let board_col = target.col as i64 + col as i64 - anchor_col as i64;
            if board_row < 0
                || board_col < 0
                || board_row >= BOARD_SIZE as i64
                || board_col >= BOARD_SIZE as i64
            {
                return None;
            }
            cells.push(Coord::new(board_row as usize, board_col as usize));
        }
        Some(cells)
    }

    /// Test whether the shape fits with its anchor on `target`
    ///
    /// Every covered cell must lie on the board and be neither blocked
    /// nor occupied.
    pub fn can_place(&self, shape: &Shape, target: Coord) -> bool {
        self.placement_cells(shape, target).is_some()
    }

    /// The cells a legal placement would cover
    ///
    /// `None` when the placement runs off the board or collides with a
    /// blocker or another piece. Drives placement previews.
    pub fn placement_cells(&self, shape: &Shape, target: Coord) -> Option<Vec<Coord>> {
        let cells = Self::footprint(shape, target)?;
        let all_free = cells
            .iter()
            .all(|coord| self.get(*coord).is_some_and(Cell::is_empty));
        all_free.then_some(cells)
    }

    /// Place a piece with the shape anchor on `target`
    ///
    /// Returns the board with the piece added. A placement that does
    /// not fit returns an unchanged copy, so callers check `can_place`
    /// first when they need to distinguish the two.
    #[must_use]
    pub fn place(&self, kind: PieceKind, shape: &Shape, target: Coord) -> Self {
        let mut board = self.clone();
        if let Some(cells) = self.placement_cells(shape, target) {
            for coord in cells {
                if let Some(cell) = board.cells.get_mut((coord.row, coord.col)) {
                    *cell = Cell::Occupied {
                        kind,
                        color: kind.color(),
                    };
                }
            }
        }
        board
    }

    /// Remove every cell occupied by the given piece
    ///
    /// Blockers are untouched. Removing a piece that is not on the
    /// board returns an unchanged copy.
    #[must_use]
    pub fn remove(&self, kind: PieceKind) -> Self {
        let mut board = self.clone();
        for cell in board.cells.iter_mut() {
            if let Cell::Occupied { kind: occupant, .. } = *cell {
                if occupant == kind {
                    *cell = Cell::Empty;
                }
            }
        }
        board
    }

    /// Derive the set of pieces currently on the board
    pub fn placed_pieces(&self) -> PieceSet {
        let mut set = PieceSet::new();
        for cell in &self.cells {
            if let Cell::Occupied { kind, .. } = cell {
                set.insert(*kind);
            }
        }
        set
    }

    /// Positions of all dice blockers in row-major order
    pub fn blocked_coords(&self) -> Vec<Coord> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| matches!(cell, Cell::Blocked))
            .map(|((row, col), _)| Coord::new(row, col))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
