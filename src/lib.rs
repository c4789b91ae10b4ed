//! Permutation metaheuristics for the Traveling Salesman Problem and
//! sequence-dependent single-machine scheduling.
//!
//! Both problems share one representation: a permutation of `N` items
//! scored against an `N x N` [`CostMatrix`], either as a closed cycle (TSP)
//! or as an open path (changeover times between consecutive tasks). Three
//! algorithms search that space:
//!
//! - **Genetic Algorithm (GA)**: Generational evolution with rank or
//!   roulette-wheel selection and uniform, one-point or two-point
//!   permutation crossover.
//! - **Simulated Annealing (SA)**: Random 2-swap moves accepted by the
//!   Metropolis criterion under geometric cooling.
//! - **Tabu Search (TS)**: Best-improvement 2-swap descent with a bounded
//!   memory of recently visited tours.
//!
//! # Example
//!
//! ```
//! use tour_metaheur::ga::{Crossover, GaConfig, GaRunner, Selection};
//! use tour_metaheur::{instances, TourKind};
//!
//! let matrix = instances::cities10();
//! let config = GaConfig::new(TourKind::Closed)
//!     .with_selection(Selection::Rank)
//!     .with_crossover(Crossover::TwoPoint)
//!     .with_seed(7);
//! let result = GaRunner::run(&matrix, &config).unwrap();
//! assert!(result.best_seen_cost <= result.best_cost);
//! ```

pub mod error;
pub mod ga;
pub mod instances;
pub mod matrix;
pub mod neighborhood;
pub mod random;
pub mod sa;
pub mod solve;
pub mod tabu;
pub mod tour;

pub use error::SearchError;
pub use matrix::CostMatrix;
pub use solve::{solve, Algorithm};
pub use tour::{Evaluator, TourKind};

/// Best tour returned by a search run, with its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The tour, a permutation of `0..N`.
    pub tour: Vec<usize>,
    /// Total cost under the run's tour convention.
    pub cost: f64,
}
