use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memalyzer_rs::{build_comparison, run, run_all, Strategy};

/// Deterministic pseudo-random KB sizes in [64, 1087]
fn synthetic_sizes(count: usize, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            64 + (state >> 33) % 1024
        })
        .collect()
}

/// Benchmark a single strategy run across input sizes
fn bench_single_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_run");

    for count in [16usize, 64, 256] {
        let blocks = synthetic_sizes(count, 7);
        let processes = synthetic_sizes(count, 13);

        for strategy in Strategy::ALL {
            group.bench_function(BenchmarkId::new(format!("{:?}", strategy), count), |b| {
                b.iter(|| run(strategy, black_box(&blocks), black_box(&processes)).unwrap());
            });
        }
    }

    group.finish();
}

/// Benchmark the full three-strategy comparison
fn bench_run_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_all");

    for count in [16usize, 64, 256] {
        let blocks = synthetic_sizes(count, 7);
        let processes = synthetic_sizes(count, 13);

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                let results = run_all(black_box(&blocks), black_box(&processes)).unwrap();
                black_box(build_comparison(&results))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_run, bench_run_all);
criterion_main!(benches);
