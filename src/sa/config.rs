//! SA configuration.

use crate::error::SearchError;
use crate::tour::TourKind;

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: `T_{k+1} = alpha * T_k`, one neighbor evaluation
/// per temperature step. The run stops once `T <= min_temperature` or
/// `max_iterations` evaluations have been made. With
/// `initial_temperature <= min_temperature` no step is taken and the run
/// returns its random initial tour.
///
/// # Examples
///
/// ```
/// use tour_metaheur::sa::SaConfig;
///
/// let config = SaConfig::tsp()
///     .with_initial_temperature(500.0)
///     .with_min_temperature(0.01)
///     .with_alpha(0.999)
///     .with_max_iterations(20_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature (`T0`). Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Stopping temperature (`Tmin`). May be 0, in which case the run goes
    /// on until the temperature underflows to 0 or `max_iterations` is reached.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// Maximum number of neighbor evaluations.
    pub max_iterations: usize,

    /// Whether tours are scored as closed cycles or open paths.
    pub tour: TourKind,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl SaConfig {
    /// Default parameters (`T0 = 100`, `Tmin = 1`, `alpha = 0.95`,
    /// 1000 iterations) for the given tour convention.
    pub fn new(tour: TourKind) -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1.0,
            alpha: 0.95,
            max_iterations: 1000,
            tour,
            seed: None,
        }
    }

    /// Defaults for the TSP: closed tours.
    pub fn tsp() -> Self {
        Self::new(TourKind::Closed)
    }

    /// Defaults for sequence-dependent scheduling: open paths.
    pub fn scheduling() -> Self {
        Self::new(TourKind::Open)
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(SearchError::invalid_config(
                "initial_temperature must be positive and finite",
            ));
        }
        if self.min_temperature.is_nan() || self.min_temperature < 0.0 {
            return Err(SearchError::invalid_config(
                "min_temperature must be non-negative",
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(SearchError::invalid_config(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
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
        let config = SaConfig::tsp();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.min_temperature - 1.0).abs() < 1e-10);
        assert!((config.alpha - 0.95).abs() < 1e-10);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tour, TourKind::Closed);
        assert_eq!(SaConfig::scheduling().tour, TourKind::Open);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::tsp().validate().is_ok());
        assert!(SaConfig::tsp().with_min_temperature(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(SaConfig::tsp().with_initial_temperature(-1.0).validate().is_err());
        assert!(SaConfig::tsp().with_initial_temperature(f64::NAN).validate().is_err());
        assert!(SaConfig::tsp().with_min_temperature(-0.5).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_min_at_or_above_initial() {
        let config = SaConfig::tsp()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_ok());
        assert!(SaConfig::tsp()
            .with_initial_temperature(1.0)
            .with_min_temperature(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(SaConfig::tsp().with_alpha(1.0).validate().is_err());
        assert!(SaConfig::tsp().with_alpha(0.0).validate().is_err());
        assert!(SaConfig::tsp().with_alpha(1.5).validate().is_err());
    }
}
