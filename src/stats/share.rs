//! Result formatting for sharing completions

/// Format milliseconds as mm:ss
///
/// Both fields are zero-padded; minutes run past 59 rather than rolling
/// into hours.
pub fn format_duration(time_ms: u64) -> String {
    let total_seconds = time_ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Shareable result blurb for a completed daily puzzle
pub fn share_text(puzzle_number: i64, time_ms: u64) -> String {
    format!(
        "Genius Square #{puzzle_number}\nTime: {}",
        format_duration(time_ms)
    )
}
