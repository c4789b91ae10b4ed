//! Simulated Annealing (SA).
//!
//! A single-trajectory metaheuristic inspired by the physical annealing
//! process. Each iteration proposes one random 2-swap neighbor and accepts
//! worsening moves with a probability that shrinks as the temperature
//! cools geometrically, allowing the search to escape local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use types::metropolis_probability;
