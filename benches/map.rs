#[macro_use]
extern crate criterion;

extern crate bn254_map2curve;
use bn254_map2curve::{map_to_curve_sswu, map_to_curve_svdw, Fp};

use criterion::{black_box, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let x = Fp::from_raw([1, 2, 3, 4]);
    let y = Fp::from_raw([5, 6, 7, 8]);

    c.bench_function("Fp add", move |b| b.iter(|| black_box(x) + black_box(y)));
    c.bench_function("Fp mul", move |b| b.iter(|| black_box(x) * black_box(y)));
    c.bench_function("Fp square", move |b| b.iter(|| black_box(x).square()));
    c.bench_function("Fp sqrt", move |b| b.iter(|| black_box(x).sqrt()));
    c.bench_function("Fp invert", move |b| b.iter(|| black_box(x).invert()));
    c.bench_function("Fp legendre", move |b| b.iter(|| black_box(x).legendre()));

    c.bench_function("map_to_curve_svdw", move |b| {
        b.iter(|| map_to_curve_svdw(black_box(&x)))
    });
    c.bench_function("map_to_curve_sswu", move |b| {
        b.iter(|| map_to_curve_sswu(black_box(&x)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
