//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::DEFAULT_TOURNAMENT_ROUNDS;
use crate::error::GaError;

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_cap, 25);
/// assert_eq!(config.max_generation, 100);
/// assert_eq!(config.max_capacity, 400.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_cap(50)
///     .with_max_capacity(120.0)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_cap: usize,

    /// Capacity bound of the knapsack. Selections heavier than this have
    /// fitness `0`.
    pub max_capacity: f64,

    /// Number of generation transitions before termination.
    ///
    /// Statistics are reported for generations `0..=max_generation`.
    pub max_generation: usize,

    /// Per-gene probability of a bit flip (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability that a parent pair is recombined (0.0–1.0).
    ///
    /// When crossover is not applied, the children are copies of the
    /// parents.
    pub crossover_rate: f64,

    /// Number of random draws in each parent tournament.
    pub tournament_rounds: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature. Results are
    /// identical to sequential evaluation.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_cap: 25,
            max_capacity: 400.0,
            max_generation: 100,
            mutation_rate: 0.1,
            crossover_rate: 0.75,
            tournament_rounds: DEFAULT_TOURNAMENT_ROUNDS,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population cap.
    pub fn with_population_cap(mut self, n: usize) -> Self {
        self.population_cap = n;
        self
    }

    /// Sets the knapsack capacity.
    pub fn with_max_capacity(mut self, capacity: f64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generation(mut self, n: usize) -> Self {
        self.max_generation = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of tournament draws.
    pub fn with_tournament_rounds(mut self, rounds: usize) -> Self {
        self.tournament_rounds = rounds;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_cap == 0 {
            return Err(GaError::EmptyPopulation);
        }
        if !self.max_capacity.is_finite() || self.max_capacity < 0.0 {
            return Err(GaError::InvalidCapacity(self.max_capacity));
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        if self.tournament_rounds == 0 {
            return Err(GaError::EmptyTournament);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), GaError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::InvalidRate { name, value })
    }
}
