//! Search algorithms for the Teeko AI
//!
//! Contains:
//! - Plain depth-bounded minimax
//! - Alpha-beta pruning with optional center-first move ordering
//!
//! Both explore hypothetical continuations on clones of the caller's
//! board; the original is never mutated.

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{alpha_beta, MoveOrdering};
pub use minimax::minimax;

use crate::board::Move;

/// Result of a root search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` on a leaf (game over, depth 0, or no
    /// legal move)
    pub best_move: Option<Move>,
    /// Score of the best line, from the root player's perspective
    pub score: f64,
    /// Total nodes visited
    pub nodes: u64,
}
