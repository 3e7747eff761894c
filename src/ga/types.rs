//! Core data types: items, chromosomes, and the best-record snapshot.

use rand::Rng;

/// An item that can be placed in the knapsack.
///
/// Items are supplied by the caller and never modified by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight counted against the capacity when the item is selected.
    pub weight: f64,
    /// Value contributed to fitness when the item is selected.
    pub value: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.weight.is_finite() && self.value.is_finite() && self.weight >= 0.0 && self.value >= 0.0
    }
}

/// A candidate solution: one inclusion bit per item plus its fitness.
///
/// `genes[i]` is `true` when `items[i]` is packed. The gene count equals the
/// item count for the lifetime of a run.
///
/// Fitness starts at `0.0` and is only meaningful after
/// [`Knapsack::evaluate`](super::Knapsack::evaluate). Any gene change makes it
/// stale until the next evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    pub genes: Vec<bool>,
    pub fitness: f64,
}

impl Chromosome {
    /// Creates a chromosome from existing genes with fitness `0.0`.
    pub fn new(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }

    /// Creates a chromosome of `length` genes, each drawn uniformly from
    /// `{false, true}`.
    pub fn create<R: Rng>(length: usize, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Self::new(genes)
    }

    /// Returns an independent copy of the genes.
    pub fn copy_genes(&self) -> Vec<bool> {
        self.genes.clone()
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// Snapshot of the best individual of a generation.
///
/// The engine overwrites this every generation with that generation's best
/// individual, so after a run it holds the best of the final population.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestRecord {
    pub genes: Vec<bool>,
    pub fitness: f64,
}

impl BestRecord {
    /// Snapshots a chromosome's genes and fitness.
    pub fn from_chromosome(chromosome: &Chromosome) -> Self {
        Self {
            genes: chromosome.copy_genes(),
            fitness: chromosome.fitness,
        }
    }

    /// Indices of the selected items, in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, &g)| g)
            .map(|(i, _)| i)
            .collect()
    }

    /// The selected items, paired with their positions in `items`.
    ///
    /// # Panics
    /// Panics if `items` is shorter than the gene sequence.
    pub fn selected_items<'a>(&self, items: &'a [Item]) -> Vec<(usize, &'a Item)> {
        self.selected_indices()
            .into_iter()
            .map(|i| (i, &items[i]))
            .collect()
    }

    /// Summed weight of the selected items.
    pub fn total_weight(&self, items: &[Item]) -> f64 {
        self.selected_items(items).iter().map(|(_, it)| it.weight).sum()
    }

    /// Summed value of the selected items, ignoring capacity.
    pub fn total_value(&self, items: &[Item]) -> f64 {
        self.selected_items(items).iter().map(|(_, it)| it.value).sum()
    }
}
