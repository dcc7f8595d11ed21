//! Benchmarks for the alignment enumeration and the full pipeline.
//!
//! The enumeration group makes the combinatorial cost visible: every added
//! occurrence of an already-repeated character multiplies the number of
//! raw sequences, which is why callers pre-split long inputs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libtypo::prelude::*;

/// A compared/accurate pair whose repeated characters force `repeats`
/// occurrences of each of two letters on both sides.
fn repeated_pair(repeats: usize) -> (String, String) {
    let accurate: String = "ab".repeat(repeats);
    let compared: String = "ba".repeat(repeats);
    (compared, accurate)
}

fn bench_basis_repeated_characters(c: &mut Criterion) {
    let mut group = c.benchmark_group("basis_repeated_characters");

    for repeats in [2usize, 3, 4].iter() {
        let (compared, accurate) = repeated_pair(*repeats);

        group.throughput(Throughput::Elements(*repeats as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), repeats, |b, _| {
            b.iter(|| {
                let basis = calculate_basis(black_box(&compared), black_box(&accurate));
                black_box(basis);
            });
        });
    }
    group.finish();
}

fn bench_basis_distinct_characters(c: &mut Criterion) {
    let mut group = c.benchmark_group("basis_distinct_characters");

    // Distinct characters keep the enumeration linear: a single raw
    // sequence regardless of length.
    for length in [8usize, 16, 26].iter() {
        let accurate: String = ('a'..='z').take(*length).collect();
        let compared: String = accurate.chars().rev().collect();

        group.throughput(Throughput::Elements(*length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| {
                let basis = calculate_basis(black_box(&compared), black_box(&accurate));
                black_box(basis);
            });
        });
    }
    group.finish();
}

fn bench_analyze_words(c: &mut Criterion) {
    let cases = [
        ("identity", "comparison", "comparison"),
        ("misspelled", "comparsion", "comparison"),
        ("scrambled", "gotob", "robot"),
        ("rejected", "zzzz", "comparison"),
    ];

    let mut group = c.benchmark_group("analyze_words");
    let config = AnalysisConfig::default();

    for (name, compared, accurate) in cases.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let text = libtypo::analyze(black_box(compared), black_box(accurate), &config);
                black_box(text);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_basis_repeated_characters,
    bench_basis_distinct_characters,
    bench_analyze_words
);
criterion_main!(benches);
