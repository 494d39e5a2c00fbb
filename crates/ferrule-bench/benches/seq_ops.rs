//! Criterion micro-benchmarks for fixed-sequence fill, comparison, and
//! traversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ferrule_bench::patterned_seq;
use ferrule_seq::FixedSeq;

/// Benchmark: bulk fill of a 1K-element sequence.
fn bench_seq_fill(c: &mut Criterion) {
    let mut seq: FixedSeq<u64, 1024> = FixedSeq::new();
    c.bench_function("seq_fill_1k", |b| {
        b.iter(|| {
            seq.fill(black_box(7));
            black_box(*seq.at(1023));
        });
    });
}

/// Benchmark: lexicographic comparison of equal-prefix sequences.
///
/// Worst case for the short-circuit: the sequences differ only at the
/// final position.
fn bench_seq_compare(c: &mut Criterion) {
    let base: FixedSeq<u64, 1024> = patterned_seq(42);
    let mut other = base;
    let last = *other.at(1023);
    *other.at_mut(1023) = last.wrapping_add(1);

    c.bench_function("seq_compare_1k_last_differs", |b| {
        b.iter(|| black_box(base.cmp(black_box(&other))));
    });
}

/// Benchmark: checked traversal summing every element through `at`.
fn bench_seq_checked_traversal(c: &mut Criterion) {
    let seq: FixedSeq<u64, 1024> = patterned_seq(42);
    c.bench_function("seq_checked_traversal_1k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for pos in 0..seq.len() {
                sum = sum.wrapping_add(*seq.at(pos));
            }
            black_box(sum);
        });
    });
}

/// Benchmark: iterator traversal for comparison with the checked path.
fn bench_seq_iter_traversal(c: &mut Criterion) {
    let seq: FixedSeq<u64, 1024> = patterned_seq(42);
    c.bench_function("seq_iter_traversal_1k", |b| {
        b.iter(|| {
            let sum: u64 = seq.iter().fold(0, |acc, &v| acc.wrapping_add(v));
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_seq_fill,
    bench_seq_compare,
    bench_seq_checked_traversal,
    bench_seq_iter_traversal
);
criterion_main!(benches);
