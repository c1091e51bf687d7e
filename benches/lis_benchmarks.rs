//! Benchmark: quadratic reconstruction vs the patience-sorting length path.
//!
//! Run with `cargo bench`.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lis::{longest_increasing_subsequence, longest_increasing_subsequence_length};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0_i64..10_000)).collect()
}

fn bench_lis(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis");

    for &len in &[100_usize, 1_000, 4_000] {
        group.bench_function(format!("quadratic_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_values(&mut rng, len)
                },
                |values| criterion::black_box(longest_increasing_subsequence(&values)),
                BatchSize::PerIteration,
            )
        });

        group.bench_function(format!("patience_length_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_values(&mut rng, len)
                },
                |values| criterion::black_box(longest_increasing_subsequence_length(&values)),
                BatchSize::PerIteration,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lis);
criterion_main!(benches);
