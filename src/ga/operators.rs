//! Binary genetic operators.
//!
//! Crossover and mutation operate on `&[bool]` gene sequences, one gene per
//! knapsack item.
//!
//! # Crossover Operators
//!
//! - [`midpoint_crossover`]: single-point crossover at `len / 2`
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flip each gene independently with a fixed rate
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::Chromosome;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at the midpoint.
///
/// Draws one uniform number in `[0, 1)`. If it is below `crossover_rate`,
/// both parents are cut at `floor(len / 2)` and their tails swapped:
///
/// ```text
/// child1 = parent1[..mid] ++ parent2[mid..]
/// child2 = parent2[..mid] ++ parent1[mid..]
/// ```
///
/// Otherwise the children are exact copies of their parents. The children
/// are always freshly allocated with fitness `0.0`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn midpoint_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    crossover_rate: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if rng.random::<f64>() < crossover_rate {
        let mid = n / 2;
        let child1 = [&parent1[..mid], &parent2[mid..]].concat();
        let child2 = [&parent2[..mid], &parent1[mid..]].concat();
        (Chromosome::new(child1), Chromosome::new(child2))
    } else {
        (
            Chromosome::new(parent1.to_vec()),
            Chromosome::new(parent2.to_vec()),
        )
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: each gene is flipped with probability `mutation_rate`.
///
/// One uniform draw is taken per gene, whether or not it flips. The
/// chromosome's fitness is stale afterwards and must be re-evaluated.
///
/// # Complexity
/// O(n)
pub fn bit_flip_mutation<R: Rng>(chromosome: &mut Chromosome, mutation_rate: f64, rng: &mut R) {
    for gene in chromosome.genes.iter_mut() {
        if rng.random::<f64>() < mutation_rate {
            *gene = !*gene;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
