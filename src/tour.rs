//! Tour evaluation.
//!
//! A tour is a permutation of `0..N` item indices. Its cost is the sum of the
//! matrix entries along consecutive items, plus the wraparound edge when the
//! tour is [`TourKind::Closed`].

use std::fmt;

use crate::error::SearchError;
use crate::matrix::CostMatrix;

/// Whether a tour returns to its starting item.
///
/// The TSP uses closed tours; sequence-dependent scheduling (changeover
/// times between tasks) uses open paths. There is no default: callers
/// always state which convention they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourKind {
    /// Cost includes the `last -> first` edge.
    Closed,
    /// No wraparound edge.
    Open,
}

impl fmt::Display for TourKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourKind::Closed => f.write_str("closed"),
            TourKind::Open => f.write_str("open"),
        }
    }
}

/// Scores tours against a cost matrix under a fixed [`TourKind`].
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    matrix: &'a CostMatrix,
    kind: TourKind,
}

impl<'a> Evaluator<'a> {
    pub fn new(matrix: &'a CostMatrix, kind: TourKind) -> Self {
        Self { matrix, kind }
    }

    pub fn matrix(&self) -> &'a CostMatrix {
        self.matrix
    }

    pub fn kind(&self) -> TourKind {
        self.kind
    }

    /// Total cost of `tour`.
    ///
    /// Empty and single-item tours cost 0.
    pub fn cost(&self, tour: &[usize]) -> f64 {
        let path: f64 = tour
            .windows(2)
            .map(|w| self.matrix.cost(w[0], w[1]))
            .sum();
        match (self.kind, tour.first(), tour.last()) {
            (TourKind::Closed, Some(&first), Some(&last)) if tour.len() > 1 => {
                path + self.matrix.cost(last, first)
            }
            _ => path,
        }
    }

    /// Fitness = `1 / cost`. Higher is better.
    ///
    /// # Errors
    /// [`SearchError::ZeroCostTour`] when the tour costs exactly zero.
    pub fn fitness(&self, tour: &[usize]) -> Result<f64, SearchError> {
        fitness_from_cost(self.cost(tour))
    }

    /// Index and cost of the cheapest tour in `population`.
    ///
    /// Ties go to the earliest tour. `None` for an empty population.
    pub fn best_of<T: AsRef<[usize]>>(&self, population: &[T]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, tour) in population.iter().enumerate() {
            let cost = self.cost(tour.as_ref());
            if best.is_none_or(|(_, c)| cost < c) {
                best = Some((i, cost));
            }
        }
        best
    }
}

pub(crate) fn fitness_from_cost(cost: f64) -> Result<f64, SearchError> {
    if cost == 0.0 {
        return Err(SearchError::ZeroCostTour);
    }
    Ok(1.0 / cost)
}

/// Returns `true` if `tour` holds each of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in tour {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
