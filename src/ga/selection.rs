//! Tournament parent selection.
//!
//! Both parents come from a single sequence of random draws: the fittest
//! individual seen becomes the first parent and the one it displaced
//! becomes the second. This couples the two parents' ranks and gives a
//! stronger selection pressure than two independent tournaments.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Chromosome;
use rand::Rng;

/// Number of draws per tournament.
pub const DEFAULT_TOURNAMENT_ROUNDS: usize = 10;

/// Selects a parent pair and returns their indices into `population`.
///
/// Draws `rounds` uniform indices (with replacement). The running best
/// starts at index `0` with a threshold fitness of `0.0`; whenever a draw is
/// strictly fitter than the running best, the previous best becomes the
/// second parent and the draw becomes the first. Equal fitness never
/// replaces, so the first one seen wins ties.
///
/// If no draw has positive fitness both indices stay at `0`.
///
/// # Complexity
/// O(rounds)
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_parent_pair<R: Rng>(
    population: &[Chromosome],
    rounds: usize,
    rng: &mut R,
) -> (usize, usize) {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let mut best = 0usize;
    let mut second = 0usize;
    let mut best_fitness = 0.0;

    for _ in 0..rounds {
        let idx = rng.random_range(0..n);
        if population[idx].fitness > best_fitness {
            best_fitness = population[idx].fitness;
            second = best;
            best = idx;
        }
    }

    (best, second)
}
