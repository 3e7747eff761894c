//! Knapsack fitness evaluation.

use super::types::{Chromosome, Item};

/// Problem data for one knapsack instance.
///
/// Holds the weights and values as parallel arrays, derived once from the
/// item list, together with the capacity bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Knapsack {
    weights: Vec<f64>,
    values: Vec<f64>,
    capacity: f64,
}

impl Knapsack {
    /// Builds the parallel weight/value arrays from `items`.
    pub fn from_items(items: &[Item], capacity: f64) -> Self {
        Self {
            weights: items.iter().map(|it| it.weight).collect(),
            values: items.iter().map(|it| it.value).collect(),
            capacity,
        }
    }

    /// Number of items, which is also the chromosome length.
    pub fn item_count(&self) -> usize {
        self.weights.len()
    }

    /// The capacity bound.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Computes the fitness of `genes` without touching any chromosome.
    ///
    /// Returns the summed value of the selected items, or `0.0` when their
    /// summed weight exceeds the capacity. Over-capacity selections are
    /// rejected outright, not penalized.
    pub fn fitness_of(&self, genes: &[bool]) -> f64 {
        debug_assert_eq!(
            genes.len(),
            self.weights.len(),
            "chromosome length must equal item count"
        );

        let (weight, value) = genes
            .iter()
            .zip(self.weights.iter().zip(self.values.iter()))
            .filter(|(&g, _)| g)
            .fold((0.0, 0.0), |(w, v), (_, (&wi, &vi))| (w + wi, v + vi));

        if weight > self.capacity {
            0.0
        } else {
            value
        }
    }

    /// Evaluates `chromosome` and stores the result in its fitness field.
    ///
    /// Idempotent: re-evaluating unchanged genes yields the same fitness.
    pub fn evaluate(&self, chromosome: &mut Chromosome) -> f64 {
        let fitness = self.fitness_of(&chromosome.genes);
        chromosome.fitness = fitness;
        fitness
    }

    /// Evaluates every chromosome in `population`.
    ///
    /// Evaluation draws no random numbers, so the parallel path produces the
    /// same fitness values as the sequential one.
    pub fn evaluate_all(&self, population: &mut [Chromosome], parallel: bool) {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                use rayon::prelude::*;
                population.par_iter_mut().for_each(|c| {
                    self.evaluate(c);
                });
                return;
            }
        }

        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        for c in population.iter_mut() {
            self.evaluate(c);
        }
    }
}
