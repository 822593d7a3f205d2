//! Interactive game state tying boards, dice, and statistics together
//!
//! A session owns the board, the piece inventory bookkeeping, the
//! timer, and the statistics recorder. Boards are values; the session
//! swaps them on every mutation.

use crate::board::grid::{Cell, Coord};
use crate::board::placement::Board;
use crate::dice::{calendar, roll};
use crate::pieces::catalog::{self, GamePiece, PieceKind};
use crate::pieces::set::PieceSet;
use crate::pieces::shape::Shape;
use crate::stats::recorder::StatsRecorder;
use chrono::NaiveDate;
use std::time::Instant;

/// Direction of a rotation step through a piece's forms
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// Step forward through the rotation list
    Clockwise,
    /// Step backward through the rotation list
    CounterClockwise,
}

/// Result of a placement attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaceOutcome {
    /// Whether the piece was placed
    pub placed: bool,
    /// Whether the placement completed the board
    pub won: bool,
    /// Whether the completion reached the statistics store
    pub recorded: bool,
}

/// One game in progress
pub struct GameSession {
    board: Board,
    dice: Vec<Coord>,
    puzzle_number: Option<i64>,
    placed: PieceSet,
    selected: Option<PieceKind>,
    rotation_index: usize,
    started: Instant,
    won: bool,
    recorder: StatsRecorder,
}

impl GameSession {
    /// Start today's daily game
    pub fn daily(recorder: StatsRecorder) -> Self {
        Self::daily_for_date(calendar::today(), recorder)
    }

    /// Start the daily game for a specific date
    pub fn daily_for_date(date: NaiveDate, recorder: StatsRecorder) -> Self {
        let dice = roll::daily_coordinates(date);
        Self::with_layout(dice, Some(calendar::puzzle_number(date)), recorder)
    }

    /// Start a game with freshly rolled dice
    ///
    /// Random games carry no puzzle number and completions are not
    /// recorded.
    pub fn random(recorder: StatsRecorder) -> Self {
        Self::with_layout(roll::roll_dice(), None, recorder)
    }

    /// Start a reproducible game from an explicit seed
    pub fn random_seeded(seed: u64, recorder: StatsRecorder) -> Self {
        Self::with_layout(roll::roll_dice_seeded(seed), None, recorder)
    }

    /// Start a game over explicit blocker positions
    ///
    /// Supplies the layout directly instead of rolling dice. Attach a
    /// puzzle number when completions should be recorded.
    pub fn with_layout(
        dice: Vec<Coord>,
        puzzle_number: Option<i64>,
        recorder: StatsRecorder,
    ) -> Self {
        Self {
            board: Board::with_blocked(&dice),
            dice,
            puzzle_number,
            placed: PieceSet::new(),
            selected: None,
            rotation_index: 0,
            started: Instant::now(),
            won: false,
            recorder,
        }
    }

    /// Current board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The blocker positions rolled for this game
    pub fn dice(&self) -> &[Coord] {
        &self.dice
    }

    /// Daily puzzle number, `None` for random games
    pub const fn puzzle_number(&self) -> Option<i64> {
        self.puzzle_number
    }

    /// Whether the board stands completed
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Pieces currently on the board
    pub const fn placed_pieces(&self) -> &PieceSet {
        &self.placed
    }

    /// Currently selected piece, `None` when nothing is selected
    pub const fn selected(&self) -> Option<PieceKind> {
        self.selected
    }

    /// Current index into the selected piece's rotation forms
    pub const fn rotation_index(&self) -> usize {
        self.rotation_index
    }

    /// Select a piece, or deselect it when already selected
    ///
    /// Pieces already on the board cannot be selected. Selecting resets
    /// the rotation to the base form. Returns whether the piece ended
    /// up selected.
    pub fn select_piece(&mut self, kind: PieceKind) -> bool {
        if self.placed.contains(kind) {
            return false;
        }
        if self.selected == Some(kind) {
            self.clear_selection();
            return false;
        }
        self.selected = Some(kind);
        self.rotation_index = 0;
        true
    }

    /// Clear the current selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.rotation_index = 0;
    }

    /// Step the selected piece through its rotation forms
    ///
    /// Does nothing without a selection. The index wraps in both
    /// directions.
    pub fn rotate(&mut self, direction: Rotation) {
        let Some(piece) = self.selected_piece() else {
            return;
        };
        let count = piece.rotation_count();
        if count == 0 {
            return;
        }
        self.rotation_index = match direction {
            Rotation::Clockwise => (self.rotation_index + 1) % count,
            Rotation::CounterClockwise => (self.rotation_index + count - 1) % count,
        };
    }

    /// Bitmap of the selected piece in its current rotation
    ///
    /// Falls back to the base shape when the rotation index runs past
    /// the piece's forms.
    pub fn active_shape(&self) -> Option<&'static Shape> {
        self.selected_piece()
            .map(|piece| piece.rotation_or_base(self.rotation_index))
    }

    /// Cells the active shape would cover with its anchor on `target`
    ///
    /// `None` without a selection or when the placement is illegal.
    pub fn preview(&self, target: Coord) -> Option<Vec<Coord>> {
        let shape = self.active_shape()?;
        self.board.placement_cells(shape, target)
    }

    /// Place the selected piece with its anchor on `target`
    ///
    /// Re-validates before mutating; an illegal target leaves the
    /// selection in place. A winning placement on a daily board records
    /// the completion; a storage failure leaves `recorded` false
    /// without failing the placement.
    pub fn place_active(&mut self, target: Coord) -> PlaceOutcome {
        let Some(kind) = self.selected else {
            return PlaceOutcome::default();
        };
        let Some(shape) = self.active_shape() else {
            return PlaceOutcome::default();
        };
        if !self.board.can_place(shape, target) {
            return PlaceOutcome::default();
        }

        self.board = self.board.place(kind, shape, target);
        self.placed.insert(kind);
        self.clear_selection();

        let won = self.board.is_solved();
        let mut recorded = false;
        if won && !self.won {
            self.won = true;
            if let Some(puzzle_number) = self.puzzle_number {
                recorded = self
                    .recorder
                    .record_completion(puzzle_number, self.elapsed_ms())
                    .is_ok();
            }
        }

        PlaceOutcome {
            placed: true,
            won,
            recorded,
        }
    }

    /// Remove the piece covering `target`
    ///
    /// Returns the removed piece kind. Blocked and empty cells remove
    /// nothing.
    pub fn remove_at(&mut self, target: Coord) -> Option<PieceKind> {
        match self.board.get(target)? {
            Cell::Occupied { kind, .. } => {
                self.remove_piece(kind);
                Some(kind)
            }
            Cell::Empty | Cell::Blocked => None,
        }
    }

    /// Remove a piece from the board wherever it sits
    ///
    /// Removing a piece reopens the board, so the win flag clears.
    pub fn remove_piece(&mut self, kind: PieceKind) {
        if !self.placed.contains(kind) {
            return;
        }
        self.board = self.board.remove(kind);
        self.placed.remove(kind);
        self.won = false;
    }

    /// Pieces not yet on the board, in catalog order
    pub fn available_pieces(&self) -> Vec<&'static GamePiece> {
        catalog::piece_catalog()
            .iter()
            .filter(|piece| !self.placed.contains(piece.kind))
            .collect()
    }

    /// Clear placed pieces while keeping the same blockers
    ///
    /// The timer keeps its original start; restarting a layout is not a
    /// fresh attempt.
    pub fn reset(&mut self) {
        self.board = Board::with_blocked(&self.dice);
        self.placed = PieceSet::new();
        self.clear_selection();
        self.won = false;
    }

    /// Milliseconds since the game started
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Read access to the statistics recorder
    pub const fn recorder(&self) -> &StatsRecorder {
        &self.recorder
    }

    /// Mutable access to the statistics recorder
    pub const fn recorder_mut(&mut self) -> &mut StatsRecorder {
        &mut self.recorder
    }

    fn selected_piece(&self) -> Option<&'static GamePiece> {
        self.selected.and_then(catalog::find_piece)
    }
}
