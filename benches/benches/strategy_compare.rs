//! Scan Strategy Comparison Benchmark
//!
//! Full keyspace scan: one ascending loop vs sharded (Rayon) execution.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use seedkey::{ScanStrategy, SearchEngine, KEYSPACE_SIZE};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Keyspace Scan");
    group.throughput(Throughput::Elements(u64::from(KEYSPACE_SIZE)));
    group.sample_size(20);

    let engine = SearchEngine::default();

    // 1. Sequential (reference loop)
    group.bench_function("Sequential", |b| {
        b.iter(|| black_box(&engine).run(ScanStrategy::Sequential));
    });

    // 2. Sharded on the global pool
    group.bench_function(format!("Sharded ({} threads)", num_cpus::get()), |b| {
        b.iter(|| black_box(&engine).run(ScanStrategy::Sharded));
    });

    // 3. Sharded on a single worker, to isolate sharding overhead
    let single = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    group.bench_function("Sharded (1 thread)", |b| {
        b.iter(|| single.install(|| black_box(&engine).run(ScanStrategy::Sharded)));
    });

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
