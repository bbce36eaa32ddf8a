//! Error types for the Teeko engine
//!
//! Every way a move can be rejected gets its own variant so a
//! human-input caller can show a precise message and re-prompt.
//! AI callers never see these: the move generator only produces
//! moves that `apply_move` accepts.

use thiserror::Error;

use crate::board::{Phase, Pos};

/// Errors raised by board mutation and checked queries
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Cell index outside the board
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Target cell already holds a piece
    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    /// Move shape does not match the current phase
    #[error("move not allowed during the {0:?} phase")]
    WrongPhase(Phase),

    /// Source cell does not hold one of the mover's pieces
    #[error("cell {0} does not hold one of your pieces")]
    NotOwned(Pos),

    /// Relocation target is not one of the 8 neighbors of the source
    #[error("cell {to} is not adjacent to {from}")]
    NotAdjacent { from: Pos, to: Pos },

    /// The game already has a winner; no further moves are legal
    #[error("the game is over")]
    GameOver,
}

/// Result type alias for board operations
pub type GameResult<T> = Result<T, GameError>;
