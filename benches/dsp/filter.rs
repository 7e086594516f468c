//! Benchmarks for Moog and Roland response evaluation.

use std::hint::black_box;

use analog_response::{evaluate, moog_response, roland_response, FilterCharacter, FilterParams};
use criterion::{BenchmarkId, Criterion};

use crate::CUTOFFS;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &cutoff in CUTOFFS {
        group.bench_with_input(BenchmarkId::new("moog", cutoff), &cutoff, |b, &fc| {
            b.iter(|| moog_response(black_box(1.0), black_box(fc), black_box(0.7)))
        });

        group.bench_with_input(BenchmarkId::new("roland", cutoff), &cutoff, |b, &fc| {
            b.iter(|| roland_response(black_box(1.0), black_box(fc), black_box(0.7)))
        });

        // Enum dispatch from a parsed character
        let params = FilterParams::default().with_cutoff(cutoff);
        group.bench_with_input(BenchmarkId::new("dispatch", cutoff), &params, |b, p| {
            b.iter(|| black_box(FilterCharacter::Roland).evaluate(black_box(p)))
        });

        // String selector, parsed on every call
        group.bench_with_input(BenchmarkId::new("by_name", cutoff), &cutoff, |b, &fc| {
            b.iter(|| evaluate(black_box(1.0), black_box(fc), black_box(0.7), black_box("Moog")))
        });
    }

    group.finish();
}
