//! Survivor selection between generations.
//!
//! The next population is the best `N` of the combined parent + offspring
//! pool (N+M truncation, also called (μ+λ) selection), shuffled so that
//! survivors carry no positional ordering into the next generation.
//!
//! # References
//!
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §5.3

use super::types::Chromosome;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Selects the next population from `population` and `offspring`.
///
/// 1. Concatenate both pools (parents first).
/// 2. Stable sort ascending by fitness; equal fitness keeps pool order.
/// 3. Keep the top `population.len()` entries, fittest first.
/// 4. Fisher–Yates shuffle the survivors.
///
/// `offspring` may be smaller than `population` (odd population caps
/// produce one child fewer than the cap).
///
/// # Complexity
/// O((N + M) log(N + M))
pub fn select_survivors<R: Rng>(
    population: Vec<Chromosome>,
    offspring: Vec<Chromosome>,
    rng: &mut R,
) -> Vec<Chromosome> {
    let n = population.len();

    let mut pool = population;
    pool.extend(offspring);
    pool.sort_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap_or(Ordering::Equal));

    let cut = pool.len() - n;
    let mut survivors = pool.split_off(cut);
    survivors.reverse();

    tracing::trace!(
        pool = cut + n,
        survivors = n,
        cutoff = survivors.last().map(|c| c.fitness),
        "truncated pool"
    );

    survivors.shuffle(rng);
    survivors
}
