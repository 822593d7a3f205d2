//! Input/output, configuration, and error handling

/// Command-line front end for inspecting boards, pieces, and statistics
pub mod cli;
/// Engine constants and store defaults
pub mod configuration;
/// Error types for engine operations and the statistics store
pub mod error;
