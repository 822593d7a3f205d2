//! The fixed nine-piece inventory
//!
//! Bitmaps, colors, and ordering mirror the boxed game. The 3-bar keeps
//! its authored two-column matrix; the empty column is what gives it
//! four distinct rotation forms.

use crate::pieces::shape::{Shape, generate_rotations};
use std::sync::LazyLock;

/// Identifier for each of the nine pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Single cell
    Dot,
    /// Two cells in a row
    Dash,
    /// Three cells in a column
    Bar3,
    /// Three cells in a bend
    Corner,
    /// Four cells in an L
    L,
    /// Four cells in a column
    Bar4,
    /// Four cells in a T
    T,
    /// Four cells in an S bend
    Z,
    /// Four cells in a square
    O,
}

/// All piece kinds in catalog order
pub const PIECE_KINDS: [PieceKind; 9] = [
    PieceKind::Dot,
    PieceKind::Dash,
    PieceKind::Bar3,
    PieceKind::Corner,
    PieceKind::L,
    PieceKind::Bar4,
    PieceKind::T,
    PieceKind::Z,
    PieceKind::O,
];

impl PieceKind {
    /// Position of this kind in catalog order
    pub const fn index(self) -> usize {
        match self {
            Self::Dot => 0,
            Self::Dash => 1,
            Self::Bar3 => 2,
            Self::Corner => 3,
            Self::L => 4,
            Self::Bar4 => 5,
            Self::T => 6,
            Self::Z => 7,
            Self::O => 8,
        }
    }

    /// Lowercase identifier used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Dash => "dash",
            Self::Bar3 => "bar3",
            Self::Corner => "corner",
            Self::L => "l",
            Self::Bar4 => "bar4",
            Self::T => "t",
            Self::Z => "z",
            Self::O => "o",
        }
    }

    /// Fixed display color of this piece
    pub const fn color(self) -> PieceColor {
        match self {
            Self::Dot => PieceColor::Orange,
            Self::Dash => PieceColor::Pink,
            Self::Bar3 => PieceColor::Purple,
            Self::Corner => PieceColor::Teal,
            Self::L => PieceColor::Blue,
            Self::Bar4 => PieceColor::Red,
            Self::T => PieceColor::Emerald,
            Self::Z => PieceColor::Yellow,
            Self::O => PieceColor::Lime,
        }
    }

    /// Parse a piece name as typed on the command line
    ///
    /// Case-insensitive. Returns `None` for anything that is not a
    /// catalog name.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_ascii_lowercase();
        PIECE_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name() == lowered)
    }
}

/// Display color tags carried by cells for the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceColor {
    /// Dot
    Orange,
    /// Dash
    Pink,
    /// 3-bar
    Purple,
    /// Corner
    Teal,
    /// L
    Blue,
    /// 4-bar
    Red,
    /// T
    Emerald,
    /// Z
    Yellow,
    /// Square
    Lime,
}

impl PieceColor {
    /// Lowercase color name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Emerald => "emerald",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
        }
    }
}

/// A piece definition with its precomputed rotation forms
#[derive(Clone, Debug)]
pub struct GamePiece {
    /// Piece identity
    pub kind: PieceKind,
    /// Display color
    pub color: PieceColor,
    /// Base bitmap as authored
    pub shape: Shape,
    /// Distinct clockwise rotations, base form first
    pub rotations: Vec<Shape>,
}

impl GamePiece {
    fn new(kind: PieceKind, shape: Shape) -> Self {
        let rotations = generate_rotations(&shape);
        Self {
            kind,
            color: kind.color(),
            shape,
            rotations,
        }
    }

    /// Rotation form at the given index
    ///
    /// Indices past the rotation list fall back to the base shape.
    pub fn rotation_or_base(&self, index: usize) -> &Shape {
        self.rotations.get(index).unwrap_or(&self.shape)
    }

    /// Number of distinct rotation forms
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }
}

static CATALOG: LazyLock<Vec<GamePiece>> = LazyLock::new(|| {
    vec![
        GamePiece::new(PieceKind::Dot, Shape::from_rows(&[[1]])),
        GamePiece::new(PieceKind::Dash, Shape::from_rows(&[[1, 1]])),
        GamePiece::new(PieceKind::Bar3, Shape::from_rows(&[[1, 0], [1, 0], [1, 0]])),
        GamePiece::new(PieceKind::Corner, Shape::from_rows(&[[1, 1], [1, 0]])),
        GamePiece::new(PieceKind::L, Shape::from_rows(&[[1, 0], [1, 0], [1, 1]])),
        GamePiece::new(PieceKind::Bar4, Shape::from_rows(&[[1], [1], [1], [1]])),
        GamePiece::new(PieceKind::T, Shape::from_rows(&[[1, 1, 1], [0, 1, 0]])),
        GamePiece::new(PieceKind::Z, Shape::from_rows(&[[1, 1, 0], [0, 1, 1]])),
        GamePiece::new(PieceKind::O, Shape::from_rows(&[[1, 1], [1, 1]])),
    ]
});

/// The nine pieces in catalog order with precomputed rotations
pub fn piece_catalog() -> &'static [GamePiece] {
    &CATALOG
}

/// Look up a piece definition by kind
pub fn find_piece(kind: PieceKind) -> Option<&'static GamePiece> {
    CATALOG.iter().find(|piece| piece.kind == kind)
}
