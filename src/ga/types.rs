//! Population member for the GA.

use crate::error::SearchError;
use crate::tour::{fitness_from_cost, Evaluator};

/// A candidate tour together with its cached cost.
///
/// The cost is computed once, when the individual is created, under the
/// evaluator's tour convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// Permutation of `0..N`.
    pub tour: Vec<usize>,
    /// Total cost of `tour`.
    pub cost: f64,
}

impl Individual {
    /// Evaluates `tour` and wraps it.
    pub fn new(tour: Vec<usize>, evaluator: &Evaluator<'_>) -> Self {
        let cost = evaluator.cost(&tour);
        Self { tour, cost }
    }

    /// Fitness `1 / cost` used for selection weighting.
    ///
    /// # Errors
    /// [`SearchError::ZeroCostTour`] if the cost is zero.
    pub fn fitness(&self) -> Result<f64, SearchError> {
        fitness_from_cost(self.cost)
    }
}

impl AsRef<[usize]> for Individual {
    fn as_ref(&self) -> &[usize] {
        &self.tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CostMatrix;
    use crate::tour::TourKind;

    #[test]
    fn test_individual_caches_cost() {
        let m = CostMatrix::from_rows(&[[0, 2, 2], [2, 0, 3], [2, 3, 0]]).unwrap();
        let eval = Evaluator::new(&m, TourKind::Closed);
        let ind = Individual::new(vec![0, 1, 2], &eval);
        assert_eq!(ind.cost, 7.0);
        assert!((ind.fitness().unwrap() - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_cost_fitness() {
        let ind = Individual {
            tour: vec![0, 1],
            cost: 0.0,
        };
        assert_eq!(ind.fitness(), Err(SearchError::ZeroCostTour));
    }
}
