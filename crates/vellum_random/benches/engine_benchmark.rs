//! Benchmark for the random engine's draw paths.
//!
//! Run with: cargo bench --package vellum_random --bench engine_benchmark

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use vellum_random::{RandomEngine, Seed};

fn benchmark_uniform(c: &mut Criterion) {
    let mut rng = RandomEngine::new(Seed::new(42));

    let mut group = c.benchmark_group("uniform");
    group.throughput(Throughput::Elements(1));
    group.bench_function("uniform", |b| b.iter(|| black_box(rng.uniform())));
    group.bench_function("gaussian", |b| {
        b.iter(|| black_box(rng.gaussian(black_box(0.0), black_box(1.0))));
    });
    group.bench_function("inside_circle", |b| {
        b.iter(|| black_box(rng.inside_circle(black_box(1.0))));
    });
    group.finish();
}

fn benchmark_shuffle(c: &mut Criterion) {
    let items: Vec<u32> = (0..10_000).collect();

    let mut group = c.benchmark_group("shuffle");
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("shuffle_10k", |b| {
        b.iter_batched(
            || RandomEngine::new(Seed::new(7)),
            |mut rng| black_box(rng.shuffle(&items)),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn benchmark_poisson(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson");
    group.sample_size(10);
    group.bench_function("poisson_1000x1000_spacing_10", |b| {
        b.iter_batched(
            || RandomEngine::new(Seed::new(3)),
            |mut rng| black_box(rng.poisson(1000.0, 1000.0, 10.0)),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, benchmark_uniform, benchmark_shuffle, benchmark_poisson);
criterion_main!(benches);
