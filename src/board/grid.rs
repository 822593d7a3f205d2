//! Board coordinates and cell states

use crate::io::configuration::BOARD_SIZE;
use crate::pieces::catalog::{PieceColor, PieceKind};
use std::fmt;

/// A 0-indexed board position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row index from the top
    pub row: usize,
    /// Column index from the left
    pub col: usize,
}

impl Coord {
    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Test whether the coordinate lies on the board
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Letter-number grid reference, "A1" for the top-left cell
    ///
    /// Rows map to letters and columns to digits, the labelling printed
    /// on the physical dice.
    pub fn grid_ref(self) -> String {
        let row_letter = char::from(b'A'.saturating_add(self.row as u8));
        format!("{row_letter}{}", self.col + 1)
    }

    /// Parse a grid reference such as "A1" or "F6"
    ///
    /// Accepts lowercase letters. Returns `None` for anything that does
    /// not name a cell on the board.
    pub fn parse_grid_ref(reference: &str) -> Option<Self> {
        let mut chars = reference.chars();
        let row_char = chars.next()?;
        let row = (row_char.to_ascii_uppercase() as usize).checked_sub('A' as usize)?;
        let digits: String = chars.collect();
        let col = digits.parse::<usize>().ok()?.checked_sub(1)?;
        let coord = Self::new(row, col);
        coord.in_bounds().then_some(coord)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid_ref())
    }
}

/// Contents of one board cell
///
/// Blocked and occupied are distinct variants, so a blocker can never
/// be overwritten by piece placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// No blocker and no piece
    Empty,
    /// Claimed by a dice blocker for the whole game
    Blocked,
    /// Covered by a placed piece
    Occupied {
        /// Which piece covers this cell
        kind: PieceKind,
        /// Display color carried for rendering
        color: PieceColor,
    },
}

impl Cell {
    /// Test whether a piece may cover this cell
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Test whether this cell counts toward a solved board
    pub const fn is_covered(self) -> bool {
        !matches!(self, Self::Empty)
    }
}
