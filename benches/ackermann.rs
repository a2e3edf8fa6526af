//! Dedicated benchmarks for the work-stack evaluator
//!
//! The Ackermann-Peter function is the classic worst case for recursive
//! evaluation, which makes it a natural stress test for the explicit-stack
//! encoding. The rows have very different cost profiles:
//! - row 0 is a single pop
//! - rows 1 and 2 grow linearly in n
//! - row 3 grows exponentially in n
//! - row 4 is tractable only for n <= 1
//!
//! The goal is to watch how iteration cost scales as the pending-frame
//! chains get longer, in isolation from any I/O or driver overhead.

use ackeval::evaluate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Benchmark 1: Base Case
///
/// A(0, n) degenerates to a single pop with no pushes.
fn bench_base_case(c: &mut Criterion) {
    c.bench_function("base_case", |b| {
        b.iter(|| black_box(evaluate(black_box(0), black_box(64))))
    });
}

/// Benchmark 2: Linear Rows
///
/// A(1, n) and A(2, n) build pending-frame chains whose length is linear
/// in n. Tests push/pop throughput on short-lived chains.
fn bench_linear_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_rows");

    for &n in &[16, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("row_1", n), &n, |b, &n| {
            b.iter(|| black_box(evaluate(black_box(1), black_box(n))))
        });
        group.bench_with_input(BenchmarkId::new("row_2", n), &n, |b, &n| {
            b.iter(|| black_box(evaluate(black_box(2), black_box(n))))
        });
    }

    group.finish();
}

/// Benchmark 3: Exponential Row Scaling
///
/// A(3, n) doubles its work with each increment of n. Tests sustained
/// throughput as the stack's high-water mark grows.
fn bench_exponential_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential_row");
    group.measurement_time(Duration::from_secs(10));

    for &n in &[2, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(evaluate(black_box(3), black_box(n))))
        });
    }

    group.finish();
}

/// Benchmark 4: Deep Unwind
///
/// A(4, 0) reduces through the whole fourth-row machinery to 13.
fn bench_deep_unwind(c: &mut Criterion) {
    c.bench_function("ackermann_4_0", |b| {
        b.iter(|| black_box(evaluate(black_box(4), black_box(0))))
    });
}

criterion_group!(
    benches,
    bench_base_case,
    bench_linear_rows,
    bench_exponential_row,
    bench_deep_unwind
);
criterion_main!(benches);
