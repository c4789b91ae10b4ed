//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random tour
//! 2. At each step:
//!    a. Enumerate the full 2-swap neighborhood of the current tour
//!    b. Discard neighbors held in the tabu memory
//!    c. Move to the cheapest remaining neighbor (first in enumeration
//!    order on ties) and record it in the memory
//!    d. Update the global best if improved
//! 3. Terminate after `max_iterations` steps, or early when every neighbor
//!    is tabu
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::Rng;
use tracing::{debug, trace};

use super::config::TabuConfig;
use super::memory::TabuList;
use crate::matrix::CostMatrix;
use crate::neighborhood::swap_pairs;
use crate::random::{random_permutation, rng_from_seed};
use crate::tour::Evaluator;
use crate::SearchResult;

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq)]
pub struct TabuResult {
    /// Best tour found.
    pub best: Vec<usize>,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Steps executed.
    pub iterations: usize,
    /// Step at which the best tour was found (0 = initial tour).
    pub best_iteration: usize,
    /// Whether the run stopped early because every neighbor was tabu.
    pub exhausted: bool,
    /// Best cost before the first step, then after every step.
    pub cost_history: Vec<f64>,
}

impl From<TabuResult> for SearchResult {
    fn from(result: TabuResult) -> Self {
        SearchResult {
            tour: result.best,
            cost: result.best_cost,
        }
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_metaheur::tabu::{TabuConfig, TabuRunner};
    /// use tour_metaheur::{CostMatrix, TourKind};
    ///
    /// let matrix = CostMatrix::from_rows(&[[0, 2, 2], [2, 0, 3], [2, 3, 0]]).unwrap();
    /// let config = TabuConfig::new(TourKind::Closed).with_seed(1);
    /// let result = TabuRunner::run(&matrix, &config);
    /// assert_eq!(result.best_cost, 7.0);
    /// assert!(result.exhausted);
    /// ```
    pub fn run(matrix: &CostMatrix, config: &TabuConfig) -> TabuResult {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Executes Tabu Search drawing the initial tour from `rng`.
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(matrix: &CostMatrix, config: &TabuConfig, rng: &mut R) -> TabuResult {
        let evaluator = Evaluator::new(matrix, config.tour);
        let n = matrix.size();

        debug!(
            items = n,
            max_iterations = config.max_iterations,
            tabu_tenure = config.tabu_tenure,
            tour = %config.tour,
            "starting tabu search"
        );

        // Initialize
        let mut current = random_permutation(n, rng);
        let mut best = current.clone();
        let mut best_cost = evaluator.cost(&current);
        let mut best_iteration = 0;

        let mut tabu = TabuList::new(config.tabu_tenure);
        let mut cost_history = Vec::with_capacity(config.max_iterations.min(1 << 16) + 1);
        cost_history.push(best_cost);

        let mut iterations = 0;
        let mut exhausted = false;

        while iterations < config.max_iterations {
            let Some(((i, j), cost)) = best_admissible_swap(&mut current, &tabu, &evaluator) else {
                debug!(iteration = iterations, "every neighbor is tabu, stopping");
                exhausted = true;
                break;
            };

            current.swap(i, j);
            tabu.push(current.clone());
            iterations += 1;

            if cost < best_cost {
                trace!(iteration = iterations, cost, "new best tour");
                best.clone_from(&current);
                best_cost = cost;
                best_iteration = iterations;
            }
            cost_history.push(best_cost);
        }

        debug!(best_cost, iterations, exhausted, "tabu search finished");

        TabuResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            exhausted,
            cost_history,
        }
    }
}

/// Cheapest non-tabu 2-swap of `tour`, as `((i, j), cost)`.
///
/// Swaps are tried in [`swap_pairs`] order and only a strictly cheaper
/// neighbor replaces the incumbent, so the lowest `(i, j)` wins ties.
/// `tour` is restored before returning.
fn best_admissible_swap(
    tour: &mut [usize],
    tabu: &TabuList,
    evaluator: &Evaluator<'_>,
) -> Option<((usize, usize), f64)> {
    let mut best_move: Option<((usize, usize), f64)> = None;
    for (i, j) in swap_pairs(tour.len()) {
        tour.swap(i, j);
        if !tabu.contains(tour) {
            let cost = evaluator.cost(tour);
            if best_move.is_none_or(|(_, c)| cost < c) {
                best_move = Some(((i, j), cost));
            }
        }
        tour.swap(i, j);
    }
    best_move
}
