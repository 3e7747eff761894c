//! Progress and result notifications.
//!
//! The engine pushes two kinds of events to a [`Reporter`]: one progress
//! event per generation and one result event when the run ends. Nothing
//! flows back into the engine.

use super::types::{BestRecord, Item};

/// Receives notifications from a running GA.
///
/// Both methods default to no-ops, so implementors only override what they
/// consume.
pub trait Reporter {
    /// Called once per generation, starting with generation `0`.
    fn on_generation(&mut self, _average_fitness: f64, _generation: usize) {}

    /// Called exactly once, after the last generation.
    ///
    /// `best.genes[i]` refers to `items[i]`.
    fn on_complete(&mut self, _best: &BestRecord, _items: &[Item]) {}
}

/// A reporter that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {}

/// A reporter that records every event it receives.
#[derive(Debug, Clone, Default)]
pub struct HistoryReporter {
    /// `(average_fitness, generation)` in the order received.
    pub progress: Vec<(f64, usize)>,

    /// The final best record and the number of items it refers to.
    pub result: Option<(BestRecord, usize)>,

    /// How many times `on_complete` was called.
    pub completions: usize,
}

impl Reporter for HistoryReporter {
    fn on_generation(&mut self, average_fitness: f64, generation: usize) {
        self.progress.push((average_fitness, generation));
    }

    fn on_complete(&mut self, best: &BestRecord, items: &[Item]) {
        self.result = Some((best.clone(), items.len()));
        self.completions += 1;
    }
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn on_generation(&mut self, average_fitness: f64, generation: usize) {
        (**self).on_generation(average_fitness, generation);
    }

    fn on_complete(&mut self, best: &BestRecord, items: &[Item]) {
        (**self).on_complete(best, items);
    }
}
