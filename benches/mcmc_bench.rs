//! Criterion benchmarks for the MCMC tour search.
//!
//! Uses points on a jittered grid so instance size is the only variable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_mcmc::distance::DistanceMetric;
use u_mcmc::mcmc::{McmcConfig, McmcRunner, SwapStrategy};
use u_mcmc::tour::Instance;

fn grid_instance(n: usize, metric: DistanceMetric) -> Instance {
    let side = (n as f64).sqrt().ceil() as usize;
    let pairs = (0..n).map(|k| {
        let (r, c) = (k / side, k % side);
        let jitter = ((k * 7919) % 13) as f64 * 0.01;
        (format!("p{k}"), [r as f64 + jitter, c as f64 - jitter])
    });
    Instance::from_pairs(pairs, metric).expect("valid instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_mcmc_constant(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcmc_constant");
    group.sample_size(10);

    for &n in &[20usize, 100, 300] {
        let instance = grid_instance(n, DistanceMetric::Planar);
        let config = McmcConfig::constant(1.0)
            .with_max_iterations(5_000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(instance, config), |b, (i, c)| {
            b.iter(|| {
                let result = McmcRunner::run(black_box(i), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_mcmc_annealed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcmc_annealed");
    group.sample_size(10);

    for strategy in [SwapStrategy::Random, SwapStrategy::Successive] {
        let instance = grid_instance(100, DistanceMetric::Haversine);
        let config = McmcConfig::annealed(70.0)
            .with_strategy(strategy)
            .with_max_iterations(5_000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("{strategy:?}"), 100),
            &(instance, config),
            |b, (i, c)| {
                b.iter(|| {
                    let result = McmcRunner::run(black_box(i), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_mcmc_constant, bench_mcmc_annealed);
criterion_main!(benches);
