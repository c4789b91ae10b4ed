//! Tabu Search configuration.

use crate::tour::TourKind;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tour_metaheur::tabu::TabuConfig;
/// use tour_metaheur::TourKind;
///
/// let config = TabuConfig::new(TourKind::Closed)
///     .with_max_iterations(200)
///     .with_tabu_tenure(20);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.tabu_tenure, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of steps.
    pub max_iterations: usize,
    /// Capacity of the tabu memory: how many recently visited tours are
    /// forbidden. 0 forbids nothing.
    pub tabu_tenure: usize,
    /// Whether tours are scored as closed cycles or open paths.
    pub tour: TourKind,
    /// Random seed for the initial tour (None for random).
    pub seed: Option<u64>,
}

impl TabuConfig {
    /// Default parameters (1000 steps, memory of 50 tours) for the given
    /// tour convention.
    pub fn new(tour: TourKind) -> Self {
        Self {
            max_iterations: 1000,
            tabu_tenure: 50,
            tour,
            seed: None,
        }
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
