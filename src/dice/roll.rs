//! Blocker rolls producing seven unique board positions
//!
//! Three modes share one rejection-sampling loop: daily rolls keyed by
//! the calendar date, ad-hoc rolls from thread entropy, and reproducible
//! rolls from an explicit seed.

use crate::board::grid::Coord;
use crate::dice::calendar;
use crate::dice::rng::DailyRng;
use crate::io::configuration::{BLOCKER_COUNT, BOARD_SIZE};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Roll the blockers for a date's daily board
///
/// Deterministic per date; every player sees the same layout. Row is
/// drawn before column on each attempt, which fixes the sequence.
pub fn daily_coordinates(date: NaiveDate) -> Vec<Coord> {
    let mut rng = DailyRng::new(calendar::date_seed(date));
    draw_unique(move || {
        let row = rng.rand_int(0, BOARD_SIZE as u32) as usize;
        let col = rng.rand_int(0, BOARD_SIZE as u32) as usize;
        Coord::new(row, col)
    })
}

/// Roll random blockers from thread-local entropy
pub fn roll_dice() -> Vec<Coord> {
    let mut rng = rand::rng();
    draw_unique(move || random_coord(&mut rng))
}

/// Roll blockers reproducibly from an explicit seed
pub fn roll_dice_seeded(seed: u64) -> Vec<Coord> {
    let mut rng = StdRng::seed_from_u64(seed);
    draw_unique(move || random_coord(&mut rng))
}

fn random_coord<R: Rng>(rng: &mut R) -> Coord {
    Coord::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    )
}

// Rejection sampling: redraw until the layout holds BLOCKER_COUNT
// distinct positions
fn draw_unique(mut draw: impl FnMut() -> Coord) -> Vec<Coord> {
    let mut coords: Vec<Coord> = Vec::with_capacity(BLOCKER_COUNT);
    while coords.len() < BLOCKER_COUNT {
        let candidate = draw();
        if !coords.contains(&candidate) {
            coords.push(candidate);
        }
    }
    coords
}
