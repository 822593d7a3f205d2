//! Game orchestration over boards, pieces, and statistics

/// Interactive game state tying boards, dice, and statistics together
pub mod session;

pub use session::GameSession;
