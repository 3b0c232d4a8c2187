//! Game rules for isolation
//!
//! This module implements the rule set:
//! - Move generation (one or two cells in eight directions)
//! - Terminal detection (a side with no free neighbouring cell has lost)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{legal_destinations, legal_moves, Direction, Move, MAX_MOVES};
pub use win::{check_winner, is_blocked};
