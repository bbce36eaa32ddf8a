//! Evaluation weight configurations
//!
//! Each opponent personality is a weight vector over the feature
//! library, hand-tuned. The strongest preset uses the full feature
//! set; the weaker ones deliberately ignore defense and connectivity.

/// Per-feature coefficients for the weighted-sum evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub material: f64,
    pub central_control: f64,
    pub mobility: f64,
    pub near_victory: f64,
    pub defense: f64,
    pub connectivity: f64,
    pub alignment: f64,
}

impl Weights {
    /// Full feature set; the strongest tuning
    pub const BALANCED: Weights = Weights {
        material: 1.0,
        central_control: 2.5,
        mobility: 6.0,
        near_victory: 17.0,
        defense: 11.0,
        connectivity: 4.0,
        alignment: 0.0,
    };

    /// Mobility-and-threat tuning, no defensive terms
    pub const AGGRESSIVE: Weights = Weights {
        material: 0.0,
        central_control: 2.0,
        mobility: 5.5,
        near_victory: 15.0,
        defense: 0.0,
        connectivity: 0.0,
        alignment: 0.0,
    };

    /// Slightly more central variant of the threat tuning
    pub const TACTICAL: Weights = Weights {
        material: 0.0,
        central_control: 3.0,
        mobility: 5.0,
        near_victory: 15.0,
        defense: 0.0,
        connectivity: 0.0,
        alignment: 0.0,
    };

    /// Center-heavy tuning that mostly sits on the middle of the board
    pub const DEFENSIVE: Weights = Weights {
        material: 0.0,
        central_control: 15.0,
        mobility: 1.5,
        near_victory: 5.0,
        defense: 0.0,
        connectivity: 0.0,
        alignment: 0.0,
    };

    /// Run-building tuning driven by the alignment feature
    pub const POSITIONAL: Weights = Weights {
        material: 0.0,
        central_control: 8.0,
        mobility: 5.0,
        near_victory: 0.0,
        defense: 0.0,
        connectivity: 0.0,
        alignment: 10.0,
    };
}
