//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic. Every step moves to the
//! cheapest 2-swap neighbor of the current tour, even when that neighbor is
//! worse, while a bounded memory of recently visited tours forbids
//! returning to them. This keeps the search from cycling around a local
//! optimum.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuList;
pub use runner::{TabuResult, TabuRunner};
