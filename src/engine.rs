//! Engine facade tying search, evaluation and configuration together
//!
//! An [`Engine`] is one fully-configured opponent brain: an algorithm,
//! a search depth, a weight vector and a move-ordering policy. The
//! named presets in [`crate::strategy`] are just engine configurations.
//!
//! # Example
//!
//! ```
//! use teeko::{Algorithm, Board, Engine, EngineConfig, MoveOrdering, Weights};
//!
//! // Shallow depth keeps the doc test fast; real games use depth 4
//! let engine = Engine::new(EngineConfig {
//!     algorithm: Algorithm::AlphaBeta,
//!     depth: 2,
//!     weights: Weights::BALANCED,
//!     ordering: MoveOrdering::CenterFirst,
//! });
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board);
//! if let Some(best_move) = result.best_move {
//!     println!("Play {best_move} ({} nodes, {}ms)", result.nodes, result.time_ms);
//! }
//! ```

use std::time::Instant;

use crate::board::{Board, Move};
use crate::eval::Weights;
use crate::search::{alphabeta, minimax, MoveOrdering};

/// Search algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Plain depth-bounded minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

/// One opponent configuration: algorithm, depth, weights, ordering
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    pub depth: u8,
    pub weights: Weights,
    pub ordering: MoveOrdering,
}

impl EngineConfig {
    /// The strongest configuration: alpha-beta over the full feature
    /// set with center-first ordering
    #[must_use]
    pub fn balanced() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth: 4,
            weights: Weights::BALANCED,
            ordering: MoveOrdering::CenterFirst,
        }
    }
}

/// Result of a move search with statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any legal move exists
    pub best_move: Option<Move>,
    /// Score of the chosen line, from the mover's perspective
    pub score: f64,
    /// Algorithm that produced the result
    pub algorithm: Algorithm,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// A configured search engine.
///
/// `get_move` is a blocking call; the board handed in is only read,
/// every hypothetical continuation runs on a clone.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine searches with
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for the side to move, or `None` when the game
    /// is over or the position is blocked.
    #[must_use]
    pub fn get_move(&self, board: &Board) -> Option<Move> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move along with timing and node statistics
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let result = match self.config.algorithm {
            Algorithm::Minimax => minimax::search(board, &self.config.weights, self.config.depth),
            Algorithm::AlphaBeta => alphabeta::search(
                board,
                &self.config.weights,
                self.config.depth,
                self.config.ordering,
            ),
        };
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            algorithm: self.config.algorithm,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: result.nodes,
        }
    }
}
