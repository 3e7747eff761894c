//! Criterion benchmarks for knapsack-ga.
//!
//! Uses synthetic item lists with deterministic weights and values so that
//! only the engine's overhead is measured.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_ga::ga::{GaConfig, GaRunner, Item, Knapsack};

/// Builds `n` items with weights in `1..=20` and values in `1..=30`.
fn synthetic_items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new((i * 7 % 20 + 1) as f64, (i * 13 % 30 + 1) as f64))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    for (n, pop, gen) in [(20usize, 25usize, 100usize), (100, 50, 100), (500, 100, 50)] {
        let items = synthetic_items(n);
        let config = GaConfig {
            population_cap: pop,
            max_generation: gen,
            max_capacity: (n * 5) as f64,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(items, config),
            |b, (items, config)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(items), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &n in &[20, 100, 1000] {
        let items = synthetic_items(n);
        let problem = Knapsack::from_items(&items, (n * 5) as f64);
        let genes: Vec<bool> = (0..n).map(|i| i % 3 != 0).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, genes), |b, (p, g)| {
            b.iter(|| black_box(p.fitness_of(black_box(g))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_run, bench_evaluate);
criterion_main!(benches);
