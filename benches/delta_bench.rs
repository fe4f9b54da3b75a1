use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use stride_lattice::sampling::{lattice_reduction, make_basis, make_delta};

/// Benchmark the stride search and its two algorithmic stages
fn bench_delta_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_search");

    group.bench_function("make_basis_200", |b| {
        b.iter(|| make_basis(black_box(81), black_box(200)).unwrap());
    });

    let (b1, b2) = make_basis(81, 200).unwrap();
    group.bench_function("lattice_reduction_200", |b| {
        b.iter(|| lattice_reduction(black_box(b1), black_box(b2)).unwrap());
    });

    group.bench_function("make_delta_200x200", |b| {
        b.iter(|| {
            make_delta(
                black_box(200),
                black_box(200),
                black_box(500),
                black_box(10),
            )
            .unwrap()
        });
    });

    group.bench_function("make_delta_1024x768", |b| {
        b.iter(|| {
            make_delta(
                black_box(1024),
                black_box(768),
                black_box(4000),
                black_box(50),
            )
            .unwrap()
        });
    });

    group.finish();
}

criterion_group!(delta_benches, bench_delta_search);
criterion_main!(delta_benches);
