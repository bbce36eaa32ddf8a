//! Position evaluation and heuristics
//!
//! A library of pure feature functions combined by a per-opponent
//! weight configuration. Presets are data, not code: every opponent
//! personality is a row of weights over the same feature set.

pub mod heuristic;
pub mod weights;

pub use heuristic::{
    alignment, central_control, connectivity, defense, evaluate, material_advantage, mobility,
    near_victory,
};
pub use weights::Weights;
