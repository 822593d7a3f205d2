use crate::pieces::catalog::{PIECE_KINDS, PieceKind};
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset tracking which pieces are on the board
///
/// One bit per catalog entry, indexed by `PieceKind::index`. Provides
/// O(1) membership testing without hashing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSet {
    bits: BitVec,
}

impl PieceSet {
    /// Create a set with no pieces present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; PIECE_KINDS.len()],
        }
    }

    /// Insert a piece kind
    pub fn insert(&mut self, kind: PieceKind) {
        if kind.index() < self.bits.len() {
            self.bits.set(kind.index(), true);
        }
    }

    /// Remove a piece kind
    pub fn remove(&mut self, kind: PieceKind) {
        if kind.index() < self.bits.len() {
            self.bits.set(kind.index(), false);
        }
    }

    /// Test piece membership
    pub fn contains(&self, kind: PieceKind) -> bool {
        self.bits.get(kind.index()).as_deref() == Some(&true)
    }

    /// Count pieces in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no pieces are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Extract the member kinds in catalog order
    pub fn kinds(&self) -> Vec<PieceKind> {
        PIECE_KINDS
            .iter()
            .copied()
            .filter(|kind| self.contains(*kind))
            .collect()
    }
}

impl Default for PieceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PieceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.kinds().iter().map(|kind| kind.name()).collect();
        write!(f, "PieceSet({}: {names:?})", self.len())
    }
}
