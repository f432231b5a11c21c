//! Nadaraya-Watson kernel regression benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (training and query sizes)
//! - Bandwidth (narrow kernels with many undefined points vs wide kernels)
//! - Optional outputs (weight sums, marginal effects, diagnostics)
//! - Pathological cases (clustered x-values, far-away query grids)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nadaraya::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate smooth sinusoidal data with Gaussian noise.
fn generate_sine_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate unsorted x-values drawn uniformly from [0, 10).
fn generate_scattered_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();
    let x_dist = Uniform::new(0.0, 10.0).unwrap();

    let x: Vec<f64> = (0..size).map(|_| x_dist.sample(&mut rng)).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate clustered x-values (groups with tiny spacing).
fn generate_clustered_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.1).unwrap();

    let x: Vec<f64> = (0..size)
        .map(|i| (i / 100) as f64 + (i % 100) as f64 * 1e-6)
        .collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [100, 1_000, 5_000] {
        let (x, y) = generate_sine_data(size, 42);
        let model = KernelRegression::new(&x, &y, 0.5).unwrap();

        group.throughput(Throughput::Elements((size * 200) as u64));
        group.bench_with_input(BenchmarkId::new("grid_200", size), &size, |b, _| {
            b.iter(|| black_box(&model).evaluate_grid(black_box(200)))
        });
    }

    group.finish();
}

fn bench_query_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_size");
    group.sample_size(50);

    let (x, y) = generate_scattered_data(1_000, 42);
    let model = KernelRegression::new(&x, &y, 0.5).unwrap();

    for m in [10, 200, 2_000] {
        let query = linspace(0.0, 10.0, m);
        group.throughput(Throughput::Elements(m as u64));
        group.bench_with_input(BenchmarkId::new("evaluate", m), &query, |b, query| {
            b.iter(|| model.evaluate(black_box(query)))
        });
    }

    group.finish();
}

fn bench_bandwidth(c: &mut Criterion) {
    let mut group = c.benchmark_group("bandwidth");
    group.sample_size(100);

    let (x, y) = generate_sine_data(2_000, 42);
    let query = linspace(0.0, 10.0, 200);

    for h in [0.001, 0.1, 0.5, 2.0, 10.0] {
        let model = KernelRegression::new(&x, &y, h).unwrap();
        group.bench_with_input(BenchmarkId::new("evaluate", h), &h, |b, _| {
            b.iter(|| model.evaluate(black_box(&query)))
        });
    }

    group.finish();
}

fn bench_outputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("outputs");
    group.sample_size(50);

    let (x, y) = generate_sine_data(1_000, 42);
    let query = linspace(0.0, 10.0, 200);

    group.bench_function("predictions_only", |b| {
        let model = NadarayaWatson::new().bandwidth(0.5).build(&x, &y).unwrap();
        b.iter(|| model.predict(black_box(&query)))
    });

    group.bench_function("all_outputs", |b| {
        let model = NadarayaWatson::new()
            .bandwidth(0.5)
            .return_weight_sums()
            .return_marginal_effects()
            .return_diagnostics()
            .build(&x, &y)
            .unwrap();
        b.iter(|| model.predict(black_box(&query)))
    });

    group.bench_function("build", |b| {
        b.iter(|| {
            NadarayaWatson::new()
                .bandwidth(0.5)
                .build(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(50);

    // Clustered x-values
    let (x_clustered, y_clustered) = generate_clustered_data(1_000, 42);
    let clustered = KernelRegression::new(&x_clustered, &y_clustered, 0.05).unwrap();
    group.bench_function("clustered", |b| {
        b.iter(|| black_box(&clustered).evaluate_grid(200))
    });

    // Every query far outside the data, all predictions undefined
    let (x, y) = generate_sine_data(1_000, 42);
    let narrow = KernelRegression::new(&x, &y, 0.01).unwrap();
    let far = linspace(1e3, 2e3, 200);
    group.bench_function("all_undefined", |b| {
        b.iter(|| narrow.evaluate(black_box(&far)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_query_size,
    bench_bandwidth,
    bench_outputs,
    bench_pathological,
);

criterion_main!(benches);
