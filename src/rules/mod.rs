//! Game rules for Teeko
//!
//! This module implements the rule set for Teeko:
//! - Win conditions (4-in-a-row, 2x2 square)
//! - Legal move generation for both phases

pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use movegen::generate_moves;
pub use win::{has_line_of_four, has_square, is_winning_for};
