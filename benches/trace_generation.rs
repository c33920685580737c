//! Trace generation throughput for game-sized and larger inputs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sort_trace::{run, AlgorithmKind};

fn scrambled(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| (i * 7919) % 101 - 50).collect()
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_generation");

    for &n in &[5usize, 19, 64, 256] {
        let values = scrambled(n);
        for kind in AlgorithmKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.as_ref(), n), &values, |b, values| {
                b.iter(|| run(kind, black_box(values)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
