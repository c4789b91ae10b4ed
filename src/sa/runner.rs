//! SA execution loop.

use rand::Rng;
use tracing::{debug, trace};

use super::config::SaConfig;
use super::types::metropolis_probability;
use crate::error::SearchError;
use crate::matrix::CostMatrix;
use crate::neighborhood::random_neighbor;
use crate::random::{random_permutation, rng_from_seed};
use crate::tour::Evaluator;
use crate::SearchResult;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SaResult {
    /// The best tour found.
    pub best: Vec<usize>,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best cost before the first iteration, then after every iteration.
    pub cost_history: Vec<f64>,
}

impl From<SaResult> for SearchResult {
    fn from(result: SaResult) -> Self {
        SearchResult {
            tour: result.best,
            cost: result.best_cost,
        }
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// [`SearchError::InvalidConfig`] if the configuration is invalid.
    pub fn run(matrix: &CostMatrix, config: &SaConfig) -> Result<SaResult, SearchError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        matrix: &CostMatrix,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, SearchError> {
        config.validate()?;

        let evaluator = Evaluator::new(matrix, config.tour);

        debug!(
            items = matrix.size(),
            initial_temperature = config.initial_temperature,
            min_temperature = config.min_temperature,
            alpha = config.alpha,
            max_iterations = config.max_iterations,
            tour = %config.tour,
            "starting simulated annealing"
        );

        // Initialize
        let mut current = random_permutation(matrix.size(), rng);
        let mut current_cost = evaluator.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = Vec::with_capacity(config.max_iterations.min(1 << 16) + 1);
        cost_history.push(best_cost);

        while temperature > config.min_temperature && iterations < config.max_iterations {
            let neighbor = random_neighbor(&current, rng);
            let neighbor_cost = evaluator.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < metropolis_probability(delta, temperature)
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            if current_cost < best_cost {
                trace!(iteration = iterations, temperature, cost = current_cost, "new best tour");
                best.clone_from(&current);
                best_cost = current_cost;
            }
            cost_history.push(best_cost);

            // Cool down
            temperature *= config.alpha;
            iterations += 1;
        }

        debug!(
            best_cost,
            iterations,
            final_temperature = temperature,
            accepted_moves,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
