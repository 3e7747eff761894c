//! End-to-end runs through the public API.

use knapsack_ga::ga::{BestRecord, GaConfig, GaRunner, Item, Reporter};
use knapsack_ga::GaError;

/// Reporter that checks ordering of notifications as they arrive.
#[derive(Default)]
struct OrderedReporter {
    next_generation: usize,
    completed: bool,
    selected: Vec<usize>,
}

impl Reporter for OrderedReporter {
    fn on_generation(&mut self, average_fitness: f64, generation: usize) {
        assert!(!self.completed, "progress after completion");
        assert_eq!(generation, self.next_generation);
        assert!(average_fitness >= 0.0);
        self.next_generation += 1;
    }

    fn on_complete(&mut self, best: &BestRecord, items: &[Item]) {
        assert!(!self.completed, "completed twice");
        assert_eq!(best.genes.len(), items.len());
        self.completed = true;
        self.selected = best.selected_indices();
    }
}

fn four_items() -> Vec<Item> {
    vec![
        Item::new(2.0, 3.0),
        Item::new(3.0, 4.0),
        Item::new(4.0, 5.0),
        Item::new(5.0, 6.0),
    ]
}

#[test]
fn four_item_instance_runs_twenty_generations() {
    let items = four_items();
    let config = GaConfig::default()
        .with_max_capacity(5.0)
        .with_population_cap(10)
        .with_max_generation(20);

    for seed in 0..25 {
        let mut reporter = OrderedReporter::default();
        let result =
            GaRunner::run_with_reporter(&items, &config.clone().with_seed(seed), &mut reporter)
                .unwrap();

        assert_eq!(result.generations, 20);
        assert_eq!(reporter.next_generation, 21);
        assert!(reporter.completed);
        assert_eq!(reporter.selected, result.best.selected_indices());

        assert!(result.best.total_weight(&items) <= 5.0);
        assert!((result.best.fitness - result.best.total_value(&items)).abs() < 1e-12);
        assert!(result.best.fitness <= 7.0);
    }
}

#[test]
fn overweight_single_item_scores_zero() {
    let items = vec![Item::new(500.0, 42.0)];
    for seed in 0..10 {
        let config = GaConfig::default().with_seed(seed);
        let result = GaRunner::run(&items, &config).unwrap();
        assert_eq!(result.best.fitness, 0.0);
    }
}

#[test]
fn odd_population_cap_runs() {
    let items = four_items();
    let config = GaConfig::default()
        .with_max_capacity(9.0)
        .with_population_cap(7)
        .with_max_generation(30)
        .with_seed(5);

    let result = GaRunner::run(&items, &config).unwrap();

    assert_eq!(result.generations, 30);
    assert_eq!(result.average_history.len(), 31);
    assert!(result.best.total_weight(&items) <= 9.0);
}

#[test]
fn default_capacity_packs_everything_when_it_fits() {
    // Total weight 14 is far below the default capacity of 400, so the
    // all-items selection (value 18) is the optimum.
    let items = four_items();
    let config = GaConfig::default().with_seed(11);
    let result = GaRunner::run(&items, &config).unwrap();
    assert_eq!(result.best.fitness, 18.0);
    assert_eq!(result.best.selected_indices(), vec![0, 1, 2, 3]);
}

#[test]
fn invalid_input_is_rejected_before_running() {
    let mut reporter = OrderedReporter::default();
    let err = GaRunner::run_with_reporter(&[], &GaConfig::default(), &mut reporter).unwrap_err();
    assert_eq!(err, GaError::EmptyItems);
    assert_eq!(reporter.next_generation, 0);
    assert!(!reporter.completed);

    let config = GaConfig {
        crossover_rate: f64::NAN,
        ..GaConfig::default()
    };
    assert!(matches!(
        GaRunner::run(&four_items(), &config),
        Err(GaError::InvalidRate {
            name: "crossover_rate",
            ..
        })
    ));
}
