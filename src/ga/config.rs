//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::operators::Crossover;
use super::selection::Selection;
use crate::error::SearchError;
use crate::tour::TourKind;

/// Configuration for the Genetic Algorithm.
///
/// The tour convention has no default and is fixed at construction.
///
/// # Defaults
///
/// ```
/// use tour_metaheur::ga::{Crossover, GaConfig, Selection};
/// use tour_metaheur::TourKind;
///
/// let config = GaConfig::new(TourKind::Closed);
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.selection, Selection::Rank);
/// assert_eq!(config.crossover, Crossover::Uniform);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tour_metaheur::ga::{Crossover, GaConfig, Selection};
/// use tour_metaheur::TourKind;
///
/// let config = GaConfig::new(TourKind::Closed)
///     .with_population_size(50)
///     .with_selection(Selection::Roulette)
///     .with_crossover(Crossover::TwoPoint)
///     .with_mutation_rate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Every generation produces
    /// exactly this many children.
    pub population_size: usize,

    /// Number of generations before termination.
    pub generations: usize,

    /// Probability that a child gets one swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Crossover strategy, fixed for the whole run.
    pub crossover: Crossover,

    /// Whether tours are scored as closed cycles or open paths.
    ///
    /// Selection weights (`1 / cost`) follow this convention too, so with
    /// [`TourKind::Open`] a zero-cost open path fails the run with
    /// [`SearchError::ZeroCostTour`](crate::SearchError::ZeroCostTour).
    pub tour: TourKind,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Default parameters for the given tour convention.
    pub fn new(tour: TourKind) -> Self {
        Self {
            population_size: 20,
            generations: 200,
            mutation_rate: 0.2,
            selection: Selection::default(),
            crossover: Crossover::default(),
            tour,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.population_size == 0 {
            return Err(SearchError::invalid_config(
                "population_size must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SearchError::invalid_config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::new(TourKind::Closed);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 200);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.selection, Selection::Rank);
        assert_eq!(config.crossover, Crossover::Uniform);
        assert_eq!(config.tour, TourKind::Closed);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::new(TourKind::Open)
            .with_population_size(40)
            .with_generations(10)
            .with_mutation_rate(0.05)
            .with_selection(Selection::Roulette)
            .with_crossover(Crossover::OnePoint)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.generations, 10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.selection, Selection::Roulette);
        assert_eq!(config.crossover, Crossover::OnePoint);
        assert_eq!(config.tour, TourKind::Open);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::new(TourKind::Closed).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::new(TourKind::Closed).with_population_size(0);
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rate_set_directly() {
        let mut config = GaConfig::new(TourKind::Closed);
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());
        config.mutation_rate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_rate() {
        let config = GaConfig::new(TourKind::Closed).with_mutation_rate(2.0);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        let config = GaConfig::new(TourKind::Closed).with_mutation_rate(-0.5);
        assert!(config.mutation_rate.abs() < 1e-10);
    }
}
