//! Genetic Algorithm over tours.
//!
//! A generational GA on permutation-encoded tours: a random initial
//! population, parent selection by rank or fitness proportion, one of three
//! permutation-preserving crossovers, swap mutation, and full replacement
//! every generation (no elitism).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, strategies, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population best, best seen, cost history
//! - [`Selection`] / [`Crossover`]: Strategy choices for a run
//!
//! # Submodules
//!
//! - [`operators`]: Crossover (uniform, one-point, two-point) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::Crossover;
pub use runner::{GaResult, GaRunner};
pub use selection::{select_by_cdf, Selection, SelectionWheel};
pub use types::Individual;
