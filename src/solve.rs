//! Single entry point over the three metaheuristics.

use crate::error::SearchError;
use crate::ga::{GaConfig, GaRunner};
use crate::matrix::CostMatrix;
use crate::sa::{SaConfig, SaRunner};
use crate::tabu::{TabuConfig, TabuRunner};
use crate::tour::TourKind;
use crate::SearchResult;

/// A metaheuristic together with its parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Genetic(GaConfig),
    Annealing(SaConfig),
    Tabu(TabuConfig),
}

impl Algorithm {
    /// Short lowercase name, for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Genetic(_) => "genetic",
            Algorithm::Annealing(_) => "annealing",
            Algorithm::Tabu(_) => "tabu",
        }
    }

    /// Tour convention the run scores against.
    pub fn tour_kind(&self) -> TourKind {
        match self {
            Algorithm::Genetic(config) => config.tour,
            Algorithm::Annealing(config) => config.tour,
            Algorithm::Tabu(config) => config.tour,
        }
    }
}

impl From<GaConfig> for Algorithm {
    fn from(config: GaConfig) -> Self {
        Algorithm::Genetic(config)
    }
}

impl From<SaConfig> for Algorithm {
    fn from(config: SaConfig) -> Self {
        Algorithm::Annealing(config)
    }
}

impl From<TabuConfig> for Algorithm {
    fn from(config: TabuConfig) -> Self {
        Algorithm::Tabu(config)
    }
}

/// Runs `algorithm` on `matrix` and returns its best tour.
///
/// For the GA this is the cheapest tour of the final population; use
/// [`GaRunner`] directly for the best seen across generations.
///
/// # Errors
///
/// Whatever the selected runner reports: an invalid configuration, or a
/// zero-cost tour reaching GA fitness evaluation.
///
/// # Examples
///
/// ```
/// use tour_metaheur::sa::SaConfig;
/// use tour_metaheur::{instances, solve, Algorithm};
///
/// let matrix = instances::cities10();
/// let result = solve(&matrix, &Algorithm::Annealing(SaConfig::tsp().with_seed(3))).unwrap();
/// assert_eq!(result.tour.len(), 10);
/// ```
pub fn solve(matrix: &CostMatrix, algorithm: &Algorithm) -> Result<SearchResult, SearchError> {
    let result: SearchResult = match algorithm {
        Algorithm::Genetic(config) => GaRunner::run(matrix, config)?.into(),
        Algorithm::Annealing(config) => SaRunner::run(matrix, config)?.into(),
        Algorithm::Tabu(config) => TabuRunner::run(matrix, config).into(),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Crossover, Selection};
    use crate::instances;
    use crate::tour::{is_permutation, Evaluator};

    #[test]
    fn test_solve_each_algorithm() {
        let matrix = instances::cities10();
        let eval = Evaluator::new(&matrix, TourKind::Closed);
        let algorithms = [
            Algorithm::Genetic(
                GaConfig::new(TourKind::Closed)
                    .with_generations(50)
                    .with_selection(Selection::Roulette)
                    .with_crossover(Crossover::OnePoint)
                    .with_seed(1),
            ),
            Algorithm::Annealing(SaConfig::tsp().with_seed(1)),
            Algorithm::Tabu(TabuConfig::new(TourKind::Closed).with_max_iterations(50).with_seed(1)),
        ];

        for algorithm in &algorithms {
            let result = solve(&matrix, algorithm).unwrap();
            assert!(is_permutation(&result.tour, 10), "{}", algorithm.name());
            assert_eq!(result.cost, eval.cost(&result.tour), "{}", algorithm.name());
        }
    }

    #[test]
    fn test_solve_matches_runner() {
        let matrix = instances::tasks6();
        let config = SaConfig::scheduling().with_seed(17);

        let direct: SearchResult = SaRunner::run(&matrix, &config).unwrap().into();
        let via_solve = solve(&matrix, &config.into()).unwrap();

        assert_eq!(direct, via_solve);
    }

    #[test]
    fn test_solve_propagates_config_error() {
        let matrix = instances::tasks6();
        let algorithm = Algorithm::from(GaConfig::new(TourKind::Open).with_population_size(0));
        assert!(matches!(
            solve(&matrix, &algorithm),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_algorithm_accessors() {
        let algorithm = Algorithm::from(TabuConfig::new(TourKind::Open));
        assert_eq!(algorithm.name(), "tabu");
        assert_eq!(algorithm.tour_kind(), TourKind::Open);
    }
}
