//! Calendar plumbing for daily puzzles
//!
//! The seed and the puzzle number are derived independently: the seed is
//! the date's digits, the puzzle number a day count from the first
//! published puzzle. Both use the player's local calendar date.

use crate::io::configuration::{EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR};
use crate::io::error::{GameError, Result};
use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Layout seed for a date, its digits as YYYYMMDD
pub fn date_seed(date: NaiveDate) -> u32 {
    let year = date.year().max(0) as u32;
    year * 10_000 + date.month() * 100 + date.day()
}

/// Sequential puzzle number for a date
///
/// Day zero is the first published puzzle; earlier dates go negative.
pub fn puzzle_number(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch()).num_days()
}

/// Parse a YYYY-MM-DD date argument
///
/// # Errors
///
/// Returns an error when the input is not a valid calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| GameError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY).unwrap_or_default()
}
