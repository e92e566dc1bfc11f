//! # Tuna Chaincode Benchmarks
//!
//! | Operation | Store | Varied by |
//! |-----------|-------|-----------|
//! | `queryRecord` | in-memory | ledger size |
//! | `queryAllRecords` | in-memory | ledger size |
//! | `recordNew` | in-memory, file-backed | - |
//! | `changeStatus` | in-memory | - |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use tc_01_world_state::{FileBackedWorldState, InMemoryWorldState};
use tc_02_tuna_chaincode::prelude::*;

fn record_args(key: &str) -> Vec<String> {
    [key, "923F", "10", "24", "67.0006, -70.5476", "1504054225", "In", ""]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn populated(count: usize) -> InMemoryWorldState {
    let store = InMemoryWorldState::new();
    let chaincode = TunaChaincode::default();
    for i in 0..count {
        let key = i.to_string();
        chaincode
            .call(&store, "recordNew", &record_args(&key))
            .expect("populate");
    }
    store
}

// ============================================================================
// READS
// ============================================================================

fn bench_query_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("query-record");
    let chaincode = TunaChaincode::default();

    for size in [10usize, 100, 999] {
        let store = populated(size);
        let mut rng = rand::thread_rng();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let key = rng.gen_range(0..size).to_string();
                black_box(chaincode.call(&store, "queryRecord", &[key.as_str()]))
            })
        });
    }

    group.finish();
}

fn bench_query_all_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("query-all-records");
    let chaincode = TunaChaincode::default();

    for size in [10usize, 100, 999] {
        let store = populated(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(chaincode.call(store, "queryAllRecords", &[] as &[&str])))
        });
    }

    group.finish();
}

// ============================================================================
// WRITES
// ============================================================================

fn bench_record_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("record-new");
    let chaincode = TunaChaincode::default();
    let args = record_args("923F");

    let memory = InMemoryWorldState::new();
    group.bench_function("in-memory", |b| {
        b.iter(|| black_box(chaincode.call(&memory, "recordNew", &args)))
    });

    let dir = tempfile::tempdir().expect("tempdir");
    let file = FileBackedWorldState::open(dir.path().join("bench.state")).expect("open");
    group.bench_function("file-backed", |b| {
        b.iter(|| black_box(chaincode.call(&file, "recordNew", &args)))
    });

    group.finish();
}

fn bench_change_status(c: &mut Criterion) {
    let chaincode = TunaChaincode::default();
    let store = populated(1);

    c.bench_function("change-status", |b| {
        b.iter(|| black_box(chaincode.call(&store, "changeStatus", &["0", "ACCEPTED"])))
    });
}

criterion_group!(reads, bench_query_record, bench_query_all_records);
criterion_group!(writes, bench_record_new, bench_change_status);
criterion_main!(reads, writes);
