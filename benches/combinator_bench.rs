//! Benchmarks for the closure combinators.
//!
//! Measures the overhead each wrapper adds on top of a direct call.

use combinars::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Composition and numeric factories
// =============================================================================

fn benchmark_compose(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose");

    let add_one = |x: i64| x + 1;
    let double = |x: i64| x * 2;

    group.bench_function("direct", |bencher| {
        bencher.iter(|| add_one(double(black_box(21))));
    });

    let composed = compose(add_one, double);
    group.bench_function("composed", |bencher| {
        bencher.iter(|| composed(black_box(21)));
    });

    group.finish();
}

fn benchmark_polynom(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("polynom");

    for coefficients in [&[8.0][..], &[1.0, -3.0][..], &[2.0, 3.0, 5.0][..]] {
        if let Some(polynom) = polynom_of(coefficients) {
            group.bench_with_input(
                BenchmarkId::new("evaluate", coefficients.len()),
                &polynom,
                |bencher, polynom| {
                    bencher.iter(|| polynom(black_box(1.5)));
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// Stateful wrappers
// =============================================================================

fn fibonacci(n: u64) -> u64 {
    (0..n).fold((0_u64, 1_u64), |(a, b), _| (b, a.wrapping_add(b))).0
}

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for size in [10_u64, 50, 90] {
        group.bench_with_input(BenchmarkId::new("uncached", size), &size, |bencher, &size| {
            bencher.iter(|| fibonacci(black_box(size)));
        });

        let memoized = memoize(fibonacci);
        memoized(size);
        group.bench_with_input(BenchmarkId::new("cached", size), &size, |bencher, &size| {
            bencher.iter(|| memoized(black_box(size)));
        });
    }

    group.finish();
}

fn benchmark_retry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("retry");

    for failures in [0_usize, 3, 10] {
        group.bench_with_input(
            BenchmarkId::new("fail_then_succeed", failures),
            &failures,
            |bencher, &failures| {
                bencher.iter(|| {
                    let mut calls = 0;
                    retry(
                        || {
                            calls += 1;
                            if calls <= failures { Err(calls) } else { Ok(calls) }
                        },
                        black_box(failures),
                    )
                });
            },
        );
    }

    group.finish();
}

fn benchmark_logging(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("logging");

    let logged_cos = with_logging("cos", f64::cos, |line: &str| {
        black_box(line);
    });
    group.bench_function("scalar_argument", |bencher| {
        bencher.iter(|| logged_cos(black_box(std::f64::consts::PI)));
    });

    let logged_len = with_logging("len", |words: Vec<&str>| words.len(), |line: &str| {
        black_box(line);
    });
    group.bench_function("sequence_argument", |bencher| {
        bencher.iter(|| logged_len(black_box(vec!["expected", "test", "value"])));
    });

    group.finish();
}

fn benchmark_partial_and_id(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_and_id");

    let completer = partial(|parts: Vec<&str>| parts.concat(), ["a", "b"]);
    group.bench_function("partial_call", |bencher| {
        bencher.iter(|| completer(black_box(vec!["c", "d"])));
    });

    let mut next_id = id_generator(0);
    group.bench_function("next_id", |bencher| {
        bencher.iter(&mut next_id);
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compose,
    benchmark_polynom,
    benchmark_memoize,
    benchmark_retry,
    benchmark_logging,
    benchmark_partial_and_id
);
criterion_main!(benches);
