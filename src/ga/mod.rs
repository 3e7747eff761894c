//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! Each candidate solution is a [`Chromosome`] with one boolean gene per
//! [`Item`]. Fitness is the total value of the packed items, or `0` when
//! they exceed the capacity.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population cap, capacity, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`RunState`]: One generation's population; advanced by
//!   [`RunState::evolve`]
//! - [`GaResult`]: Final best record with per-generation statistics
//! - [`Reporter`]: Receives progress and result notifications
//!
//! # Submodules
//!
//! - [`operators`]: Midpoint crossover and bit-flip mutation
//! - [`selection`]: Correlated-pair tournament selection
//! - [`replacement`]: Elitist truncation with shuffle
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod config;
mod fitness;
pub mod operators;
pub mod replacement;
mod reporter;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::Knapsack;
pub use reporter::{HistoryReporter, NoopReporter, Reporter};
pub use runner::{GaResult, GaRunner, GenerationStats, RunState};
pub use types::{BestRecord, Chromosome, Item};
