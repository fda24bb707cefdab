use criterion::{black_box, criterion_group, criterion_main, Criterion};

use teeny_compiler::prelude::*;

const FIB: &str = include_str!("../tests/fib.teeny");

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("fib single pass", |b| {
        b.iter(|| black_box(compile_str(black_box(FIB))))
    });

    c.bench_function("fib events", |b| {
        b.iter(|| black_box(parse_events(black_box(FIB))))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
