//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → generational
//! replacement → repeat.

use rand::Rng;
use tracing::{debug, trace};

use super::config::GaConfig;
use super::operators::swap_mutation;
use super::types::Individual;
use crate::error::SearchError;
use crate::matrix::CostMatrix;
use crate::random::{random_permutation, rng_from_seed};
use crate::tour::Evaluator;
use crate::SearchResult;

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Cheapest tour of the final population.
    pub best: Vec<usize>,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Cheapest tour seen in any generation, initial population included.
    ///
    /// Replacement is generational without elitism, so this can be
    /// cheaper than `best`.
    pub best_seen: Vec<usize>,

    /// Cost of `best_seen`.
    pub best_seen_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Running best-seen cost: initial population, then one entry per
    /// generation. Non-increasing.
    pub cost_history: Vec<f64>,
}

impl From<GaResult> for SearchResult {
    fn from(result: GaResult) -> Self {
        SearchResult {
            tour: result.best,
            cost: result.best_cost,
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tour_metaheur::ga::{Crossover, GaConfig, GaRunner};
/// use tour_metaheur::{CostMatrix, TourKind};
///
/// let matrix = CostMatrix::from_rows(&[[0, 2, 9], [1, 0, 6], [15, 7, 0]]).unwrap();
/// let config = GaConfig::new(TourKind::Closed)
///     .with_crossover(Crossover::TwoPoint)
///     .with_generations(20)
///     .with_seed(42);
/// let result = GaRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.best.len(), 3);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidConfig`] if the configuration is invalid
    /// - [`SearchError::ZeroCostTour`] if a tour with zero cost appears
    ///   (its fitness is undefined)
    pub fn run(matrix: &CostMatrix, config: &GaConfig) -> Result<GaResult, SearchError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        matrix: &CostMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, SearchError> {
        config.validate()?;

        let evaluator = Evaluator::new(matrix, config.tour);
        let n = matrix.size();

        debug!(
            items = n,
            population_size = config.population_size,
            generations = config.generations,
            mutation_rate = config.mutation_rate,
            selection = %config.selection,
            crossover = %config.crossover,
            tour = %config.tour,
            "starting genetic search"
        );

        // 1. Initialize population
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::new(random_permutation(n, rng), &evaluator))
            .collect();

        // 2. Track best
        let mut best_seen = find_best(&population)?.clone();
        let mut cost_history = Vec::with_capacity(config.generations + 1);
        cost_history.push(best_seen.cost);

        // 3. Evolutionary loop
        for generation in 0..config.generations {
            let fitness = population
                .iter()
                .map(Individual::fitness)
                .collect::<Result<Vec<f64>, _>>()?;
            let wheel = config.selection.wheel(&fitness)?;

            let mut next_gen = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let parent1 = &population[wheel.sample(rng)];
                let parent2 = &population[wheel.sample(rng)];

                let mut child = config.crossover.apply(&parent1.tour, &parent2.tour, rng);
                swap_mutation(&mut child, config.mutation_rate, rng);

                next_gen.push(Individual::new(child, &evaluator));
            }

            population = next_gen;

            let gen_best = find_best(&population)?;
            if gen_best.cost < best_seen.cost {
                trace!(generation = generation + 1, cost = gen_best.cost, "new best tour");
                best_seen = gen_best.clone();
            }
            cost_history.push(best_seen.cost);
        }

        let best = find_best(&population)?.clone();

        debug!(
            best_cost = best.cost,
            best_seen_cost = best_seen.cost,
            "genetic search finished"
        );

        Ok(GaResult {
            best: best.tour,
            best_cost: best.cost,
            best_seen: best_seen.tour,
            best_seen_cost: best_seen.cost,
            generations: config.generations,
            cost_history,
        })
    }
}

/// Find the individual with the lowest cost; ties go to the earliest.
fn find_best(population: &[Individual]) -> Result<&Individual, SearchError> {
    population
        .iter()
        .reduce(|best, ind| if ind.cost < best.cost { ind } else { best })
        .ok_or(SearchError::InvalidState("population must not be empty"))
}

// ============================================================================
// Tests
// ============================================================================
