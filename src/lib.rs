//! Generational genetic algorithm for the 0/1 knapsack problem.
//!
//! Given a list of [`Item`](ga::Item)s, each with a weight and a value, and a
//! capacity bound, the engine searches for the subset of items with the
//! highest total value whose total weight stays within capacity.
//!
//! - **Representation**: one boolean gene per item (included / excluded).
//! - **Fitness**: total value of the selected items, or `0` when the
//!   selection is over capacity.
//! - **Operators**: tournament parent selection, midpoint single-point
//!   crossover, per-gene bit-flip mutation.
//! - **Replacement**: elitist truncation of the parent + offspring pool,
//!   followed by a shuffle.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaRunner, Item};
//!
//! let items = vec![
//!     Item::new(2.0, 3.0),
//!     Item::new(3.0, 4.0),
//!     Item::new(4.0, 5.0),
//!     Item::new(5.0, 6.0),
//! ];
//! let config = GaConfig::default()
//!     .with_max_capacity(5.0)
//!     .with_population_cap(10)
//!     .with_max_generation(20)
//!     .with_seed(7);
//!
//! let result = GaRunner::run(&items, &config).unwrap();
//! assert_eq!(result.generations, 20);
//! assert!(result.best.total_weight(&items) <= 5.0);
//! ```

pub mod error;
pub mod ga;
mod random;

pub use error::GaError;
