//! Seedkey Criterion Benchmark
//!
//! Cost of the primitive, one response, and one candidate verdict.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use seedkey::{CandidateKey, Challenge, ResponseComputer, SearchEngine, SecretTable};
use std::hint::black_box;

// =============================================================================
// BENCHMARK 1: PRIMITIVE
// =============================================================================

/// Single transform, positive and negative operands.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Transform");
    group.throughput(Throughput::Elements(1));

    for (high, low, name) in [(0x12, 0x34, "positive"), (0xD5, 0xE9, "negative")] {
        group.bench_function(name, |b| {
            b.iter(|| seedkey::transform(black_box(high), black_box(low), &SecretTable::PRIMARY))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: RESPONSE
// =============================================================================

/// Four transforms with feedback.
fn bench_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Response");
    group.throughput(Throughput::Elements(1));

    let computer = ResponseComputer::default();
    let challenge = Challenge::new([0xD5, 0xDA, 0x2A, 0xE9]);

    group.bench_function("compute", |b| {
        b.iter(|| computer.compute(black_box(CandidateKey::new(0x0107)), &challenge))
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 3: VERDICT
// =============================================================================

/// Early reject (one response) vs accepted key (two responses).
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Evaluate");
    let engine = SearchEngine::default();

    group.bench_function("rejected-first", |b| {
        b.iter(|| engine.evaluate(black_box(CandidateKey::new(0x0000))))
    });
    group.bench_function("accepted", |b| {
        b.iter(|| engine.evaluate(black_box(CandidateKey::new(0x0107))))
    });
    group.finish();
}

criterion_group!(benches, bench_transform, bench_response, bench_evaluate);
criterion_main!(benches);
