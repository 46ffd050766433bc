//! Benchmarks for sparse matrix operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intmat::{add, codec, multiply, transpose, SparseMatrix};

/// Banded test matrix: `bandwidth` entries on each side of the diagonal
fn create_banded_matrix(n: usize, bandwidth: usize) -> SparseMatrix<i64> {
    let mut matrix = SparseMatrix::new(n, n).unwrap();
    for i in 0..n {
        let lo = i.saturating_sub(bandwidth);
        let hi = (i + bandwidth + 1).min(n);
        for j in lo..hi {
            matrix.set(i, j, (i + j) as i64 % 7 + 1).unwrap();
        }
    }
    matrix
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for n in [100, 1_000, 5_000] {
        let a = create_banded_matrix(n, 2);
        let b = create_banded_matrix(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let a = create_banded_matrix(5_000, 3);
    let b = create_banded_matrix(5_000, 1);

    c.bench_function("add_5000", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&b)).unwrap())
    });
    c.bench_function("transpose_5000", |bench| bench.iter(|| transpose(black_box(&a))));
}

fn bench_codec(c: &mut Criterion) {
    let a = create_banded_matrix(5_000, 3);
    let text = codec::serialize(&a);

    c.bench_function("serialize_5000", |bench| bench.iter(|| codec::serialize(black_box(&a))));
    c.bench_function("parse_5000", |bench| {
        bench.iter(|| codec::parse::<i64>(black_box(&text)).unwrap())
    });
}

criterion_group!(benches, bench_multiply, bench_elementwise, bench_codec);
criterion_main!(benches);
