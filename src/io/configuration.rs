//! Engine constants and store defaults

/// Board edge length in cells
pub const BOARD_SIZE: usize = 6;

/// Number of dice blockers rolled per game
pub const BLOCKER_COUNT: usize = 7;

// Daily puzzles are numbered from this date
/// Epoch year for puzzle numbering
pub const EPOCH_YEAR: i32 = 2025;
/// Epoch month for puzzle numbering
pub const EPOCH_MONTH: u32 = 1;
/// Epoch day for puzzle numbering
pub const EPOCH_DAY: u32 = 15;

// Persistence settings
/// File name of the statistics document in the local data directory
pub const STATS_FILE_NAME: &str = "daysquare_stats.json";
