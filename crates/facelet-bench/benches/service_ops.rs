//! Criterion micro-benchmarks for session-level operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use facelet_bench::{populated_service, session_keys};

/// Benchmark: one move through the in-memory store, 1K live sessions.
fn bench_apply_move_1k_sessions(c: &mut Criterion) {
    let service = populated_service(1000).unwrap();
    let keys = session_keys(1000);
    let mut i = 0usize;

    c.bench_function("service_apply_move_1k", |b| {
        b.iter(|| {
            i = (i + 1) % keys.len();
            service
                .apply_move(black_box(&keys[i]), black_box("R"), None)
                .unwrap()
        });
    });
}

/// Benchmark: query an existing session.
fn bench_query_state(c: &mut Criterion) {
    let service = populated_service(100).unwrap();
    let keys = session_keys(100);

    c.bench_function("service_query_state", |b| {
        b.iter(|| service.query_state(black_box(&keys[42])).unwrap());
    });
}

criterion_group!(benches, bench_apply_move_1k_sessions, bench_query_state);
criterion_main!(benches);
