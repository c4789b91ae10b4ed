//! Criterion benchmarks for the tour metaheuristics.
//!
//! Runs on the bundled instances and on random symmetric matrices of
//! growing size, with fixed seeds so every sample does the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use tour_metaheur::ga::{Crossover, GaConfig, GaRunner, Selection};
use tour_metaheur::random::create_rng;
use tour_metaheur::sa::{SaConfig, SaRunner};
use tour_metaheur::tabu::{TabuConfig, TabuRunner};
use tour_metaheur::{instances, CostMatrix, TourKind};

// ===========================================================================
// Instances
// ===========================================================================

fn random_matrix(n: usize, seed: u64) -> CostMatrix {
    let mut rng = create_rng(seed);
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = rng.random_range(1.0..100.0);
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }
    CostMatrix::new(rows).expect("random matrix is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_cities10");
    group.sample_size(10);

    let matrix = instances::cities10();
    for selection in [Selection::Rank, Selection::Roulette] {
        for crossover in [Crossover::Uniform, Crossover::OnePoint, Crossover::TwoPoint] {
            let config = GaConfig::new(TourKind::Closed)
                .with_selection(selection)
                .with_crossover(crossover)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(selection.to_string(), crossover),
                &config,
                |b, c| {
                    b.iter(|| {
                        let result = GaRunner::run(black_box(&matrix), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_ga_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_random");
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        let matrix = random_matrix(n, 7);
        let config = GaConfig::new(TourKind::Closed)
            .with_population_size(50)
            .with_generations(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, config), |b, (m, c)| {
            b.iter(|| {
                let result = GaRunner::run(black_box(m), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    let slow = SaConfig::tsp()
        .with_min_temperature(0.01)
        .with_alpha(0.999)
        .with_max_iterations(20_000)
        .with_seed(42);
    let cities = instances::cities10();
    group.bench_function("cities10_default", |b| {
        let config = SaConfig::tsp().with_seed(42);
        b.iter(|| black_box(SaRunner::run(black_box(&cities), &config)))
    });
    group.bench_function("cities10_slow_cooling", |b| {
        b.iter(|| black_box(SaRunner::run(black_box(&cities), &slow)))
    });

    for &n in &[20, 50, 100] {
        let matrix = random_matrix(n, 7);
        group.bench_with_input(BenchmarkId::new("random", n), &matrix, |b, m| {
            b.iter(|| black_box(SaRunner::run(black_box(m), &slow)))
        });
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    let tasks = instances::tasks6();
    group.bench_function("tasks6", |b| {
        let config = TabuConfig::new(TourKind::Open).with_seed(42);
        b.iter(|| black_box(TabuRunner::run(black_box(&tasks), &config)))
    });

    for &n in &[20, 50] {
        let matrix = random_matrix(n, 7);
        let config = TabuConfig::new(TourKind::Closed)
            .with_max_iterations(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::new("random", n), &matrix, |b, m| {
            b.iter(|| black_box(TabuRunner::run(black_box(m), &config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_strategies, bench_ga_random, bench_sa, bench_tabu);
criterion_main!(benches);
