//! Named opponent strategies
//!
//! Every opponent the game can field is a [`Strategy`]: given a board,
//! return one move. The search-backed opponents differ only in their
//! engine configuration, so each one is a row in a preset table rather
//! than its own type. `Random` is the baseline opponent and doubles as
//! a fuzz-testing move source.

use rand::seq::SliceRandom;

use crate::board::{Board, Move};
use crate::engine::{Algorithm, Engine, EngineConfig};
use crate::eval::Weights;
use crate::rules::generate_moves;
use crate::search::MoveOrdering;

/// A move-selection policy.
///
/// Implementations are stateless apart from cached configuration and
/// never mutate the board they are given. `next_move` returns `None`
/// only when no legal move exists (game over or blocked position).
pub trait Strategy {
    fn next_move(&self, board: &Board) -> Option<Move>;
    fn name(&self) -> &'static str;
}

/// One registry row: a named engine configuration
struct Preset {
    name: &'static str,
    algorithm: Algorithm,
    depth: u8,
    weights: Weights,
    ordering: MoveOrdering,
}

/// The search-backed opponents, strongest first
const PRESETS: [Preset; 5] = [
    Preset {
        name: "balanced",
        algorithm: Algorithm::AlphaBeta,
        depth: 4,
        weights: Weights::BALANCED,
        ordering: MoveOrdering::CenterFirst,
    },
    Preset {
        name: "aggressive",
        algorithm: Algorithm::AlphaBeta,
        depth: 4,
        weights: Weights::AGGRESSIVE,
        ordering: MoveOrdering::Generation,
    },
    Preset {
        name: "tactical",
        algorithm: Algorithm::AlphaBeta,
        depth: 4,
        weights: Weights::TACTICAL,
        ordering: MoveOrdering::Generation,
    },
    Preset {
        name: "defensive",
        algorithm: Algorithm::Minimax,
        depth: 3,
        weights: Weights::DEFENSIVE,
        ordering: MoveOrdering::Generation,
    },
    Preset {
        name: "positional",
        algorithm: Algorithm::Minimax,
        depth: 3,
        weights: Weights::POSITIONAL,
        ordering: MoveOrdering::Generation,
    },
];

/// Every strategy name `create` accepts
pub const STRATEGY_NAMES: [&str; 6] = [
    "balanced",
    "aggressive",
    "tactical",
    "defensive",
    "positional",
    "random",
];

/// Look up a strategy by name.
///
/// The set of opponents is closed and known at build time; unknown
/// names return `None` so the caller can re-prompt.
#[must_use]
pub fn create(name: &str) -> Option<Box<dyn Strategy>> {
    if name == "random" {
        return Some(Box::new(RandomStrategy));
    }
    PRESETS.iter().find(|preset| preset.name == name).map(|preset| {
        Box::new(SearchStrategy::new(
            preset.name,
            EngineConfig {
                algorithm: preset.algorithm,
                depth: preset.depth,
                weights: preset.weights,
                ordering: preset.ordering,
            },
        )) as Box<dyn Strategy>
    })
}

/// A search-backed opponent: a name plus a configured [`Engine`]
pub struct SearchStrategy {
    name: &'static str,
    engine: Engine,
}

impl SearchStrategy {
    #[must_use]
    pub fn new(name: &'static str, config: EngineConfig) -> Self {
        Self {
            name,
            engine: Engine::new(config),
        }
    }
}

impl Strategy for SearchStrategy {
    fn next_move(&self, board: &Board) -> Option<Move> {
        self.engine.get_move(board)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Uniformly random legal mover
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_move(&self, board: &Board) -> Option<Move> {
        let moves = generate_moves(board);
        moves.choose(&mut rand::thread_rng()).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
