//! Error types for the knapsack GA.
//!
//! The evolutionary loop itself cannot fail; every error is a rejected
//! precondition detected before the first generation runs.

use thiserror::Error;

/// Error returned when a run is started with invalid input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// The item list is empty, so there is nothing to select.
    #[error("item list must not be empty")]
    EmptyItems,

    /// An item has a negative or non-finite weight or value.
    #[error("item {index} is invalid: weight={weight}, value={value}")]
    InvalidItem {
        index: usize,
        weight: f64,
        value: f64,
    },

    /// The population cap is zero.
    #[error("population_cap must be at least 1")]
    EmptyPopulation,

    /// A probability parameter lies outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    /// The capacity is negative or non-finite.
    #[error("max_capacity must be a non-negative finite number, got {0}")]
    InvalidCapacity(f64),

    /// The tournament samples no individuals.
    #[error("tournament_rounds must be at least 1")]
    EmptyTournament,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GaError::EmptyItems.to_string(),
            "item list must not be empty"
        );
        assert_eq!(
            GaError::InvalidRate {
                name: "mutation_rate",
                value: -0.5
            }
            .to_string(),
            "mutation_rate must be within [0, 1], got -0.5"
        );
        assert_eq!(
            GaError::InvalidCapacity(-1.0).to_string(),
            "max_capacity must be a non-negative finite number, got -1"
        );
    }
}
