//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! evaluation → replacement → repeat, for a fixed number of generations.
//!
//! The population lives in a [`RunState`] value that each generation step
//! consumes and returns, so a single generation can be driven and inspected
//! in isolation.

use super::config::GaConfig;
use super::fitness::Knapsack;
use super::operators::{bit_flip_mutation, midpoint_crossover};
use super::replacement::select_survivors;
use super::reporter::{NoopReporter, Reporter};
use super::selection::select_parent_pair;
use super::types::{BestRecord, Chromosome, Item};
use crate::error::GaError;
use crate::random::rng_from_option;
use rand::Rng;
use tracing::{debug, info};

/// Summary statistics of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index, starting at `0` for the initial population.
    pub generation: usize,

    /// Mean fitness over the population.
    pub average_fitness: f64,

    /// Fitness of the best individual.
    pub best_fitness: f64,

    /// Position of the best individual in the population.
    pub best_index: usize,
}

/// The population of one generation together with its index.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    generation: usize,
    population: Vec<Chromosome>,
}

impl RunState {
    /// Creates generation `0`: `config.population_cap` random, evaluated
    /// chromosomes.
    ///
    /// # Panics
    /// Panics if `config.population_cap` is zero.
    pub fn initialize<R: Rng>(problem: &Knapsack, config: &GaConfig, rng: &mut R) -> Self {
        assert!(config.population_cap > 0, "population_cap must be positive");

        let mut population: Vec<Chromosome> = (0..config.population_cap)
            .map(|_| Chromosome::create(problem.item_count(), rng))
            .collect();
        problem.evaluate_all(&mut population, config.parallel);

        Self {
            generation: 0,
            population,
        }
    }

    /// Index of this generation.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The evaluated population of this generation.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Consumes the state and returns its population.
    pub fn into_population(self) -> Vec<Chromosome> {
        self.population
    }

    /// Computes average and best fitness.
    ///
    /// The best individual is the first one whose fitness strictly exceeds
    /// every earlier one, starting from index `0` with a threshold of `0.0`.
    pub fn stats(&self) -> GenerationStats {
        let mut best_index = 0usize;
        let mut best_fitness = 0.0;
        let mut total = 0.0;

        for (i, c) in self.population.iter().enumerate() {
            if c.fitness > best_fitness {
                best_fitness = c.fitness;
                best_index = i;
            }
            total += c.fitness;
        }

        GenerationStats {
            generation: self.generation,
            average_fitness: total / self.population.len() as f64,
            best_fitness,
            best_index,
        }
    }

    /// Snapshot of this generation's best individual.
    pub fn best_record(&self) -> BestRecord {
        BestRecord::from_chromosome(&self.population[self.stats().best_index])
    }

    /// Runs one generation transition and returns the next state.
    ///
    /// Produces `population_cap / 2` parent pairs; each pair yields two
    /// crossed-over, mutated, and evaluated children. The next population
    /// is the elitist truncation of parents and children.
    pub fn evolve<R: Rng>(self, problem: &Knapsack, config: &GaConfig, rng: &mut R) -> Self {
        let pairs = config.population_cap / 2;
        let mut offspring = Vec::with_capacity(pairs * 2);

        for _ in 0..pairs {
            let (a, b) = select_parent_pair(&self.population, config.tournament_rounds, rng);
            let (mut child1, mut child2) = midpoint_crossover(
                &self.population[a].genes,
                &self.population[b].genes,
                config.crossover_rate,
                rng,
            );
            bit_flip_mutation(&mut child1, config.mutation_rate, rng);
            bit_flip_mutation(&mut child2, config.mutation_rate, rng);
            offspring.push(child1);
            offspring.push(child2);
        }

        // Evaluation draws no random numbers, so batching it after the
        // loop leaves the RNG stream unchanged.
        problem.evaluate_all(&mut offspring, config.parallel);

        Self {
            generation: self.generation + 1,
            population: select_survivors(self.population, offspring, rng),
        }
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Best individual of the final generation.
    pub best: BestRecord,

    /// Number of generation transitions executed.
    pub generations: usize,

    /// Average fitness of each generation, including generation `0`.
    pub average_history: Vec<f64>,

    /// Best fitness of each generation, including generation `0`.
    pub best_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner, HistoryReporter, Item};
///
/// let items = vec![Item::new(12.0, 4.0), Item::new(2.0, 2.0), Item::new(1.0, 1.0)];
/// let config = GaConfig::default().with_max_capacity(15.0).with_seed(1);
///
/// let mut history = HistoryReporter::default();
/// let result = GaRunner::run_with_reporter(&items, &config, &mut history).unwrap();
/// assert_eq!(history.progress.len(), result.generations + 1);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA without reporting.
    pub fn run(items: &[Item], config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with_reporter(items, config, NoopReporter)
    }

    /// Runs the GA, sending progress and the final result to `reporter`.
    ///
    /// The reporter receives `on_generation` for generations
    /// `0..=max_generation`, then `on_complete` once.
    pub fn run_with_reporter<Rep: Reporter>(
        items: &[Item],
        config: &GaConfig,
        mut reporter: Rep,
    ) -> Result<GaResult, GaError> {
        validate_items(items)?;
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let problem = Knapsack::from_items(items, config.max_capacity);

        info!(
            items = items.len(),
            population_cap = config.population_cap,
            max_generation = config.max_generation,
            capacity = config.max_capacity,
            "starting knapsack GA"
        );

        let mut average_history = Vec::with_capacity(config.max_generation + 1);
        let mut best_history = Vec::with_capacity(config.max_generation + 1);

        let mut state = RunState::initialize(&problem, config, &mut rng);
        let mut best = observe(&state, &mut reporter, &mut average_history, &mut best_history);

        for _ in 0..config.max_generation {
            state = state.evolve(&problem, config, &mut rng);
            best = observe(&state, &mut reporter, &mut average_history, &mut best_history);
        }

        reporter.on_complete(&best, items);

        info!(
            generations = state.generation(),
            best_fitness = best.fitness,
            "knapsack GA finished"
        );

        Ok(GaResult {
            best,
            generations: state.generation(),
            average_history,
            best_history,
        })
    }
}

/// Reports one generation and returns its best record.
fn observe<Rep: Reporter>(
    state: &RunState,
    reporter: &mut Rep,
    average_history: &mut Vec<f64>,
    best_history: &mut Vec<f64>,
) -> BestRecord {
    let stats = state.stats();
    reporter.on_generation(stats.average_fitness, stats.generation);
    average_history.push(stats.average_fitness);
    best_history.push(stats.best_fitness);

    debug!(
        generation = stats.generation,
        best = stats.best_fitness,
        average = stats.average_fitness,
        "generation evaluated"
    );

    BestRecord::from_chromosome(&state.population[stats.best_index])
}

fn validate_items(items: &[Item]) -> Result<(), GaError> {
    if items.is_empty() {
        return Err(GaError::EmptyItems);
    }
    match items.iter().position(|it| !it.is_valid()) {
        Some(index) => Err(GaError::InvalidItem {
            index,
            weight: items[index].weight,
            value: items[index].value,
        }),
        None => Ok(()),
    }
}

// ============================================================================
// Tests
// ============================================================================
