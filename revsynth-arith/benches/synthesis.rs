//! Synthesis throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use revsynth_arith::{adder, cmpr, long_division_divider};

fn bench_fragments(c: &mut Criterion) {
    c.bench_function("adder_32", |b| {
        b.iter(|| adder(black_box(32)).unwrap());
    });
    c.bench_function("cmpr_32", |b| {
        b.iter(|| cmpr(black_box(32)).unwrap());
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("long_division_16x16", |b| {
        b.iter(|| long_division_divider(black_box(16), black_box(16)).unwrap());
    });
    c.bench_function("long_division_24x8", |b| {
        b.iter(|| long_division_divider(black_box(24), black_box(8)).unwrap());
    });
}

criterion_group!(benches, bench_fragments, bench_division);
criterion_main!(benches);
