//! Benchmarks for atom-cell
//!
//! Run with: cargo bench

use std::cell::Cell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use atom_cell::atom;

// =============================================================================
// ATOM BENCHMARKS
// =============================================================================

fn bench_atom_create(c: &mut Criterion) {
    c.bench_function("atom_create", |b| b.iter(|| black_box(atom(0i32))));
}

fn bench_atom_get(c: &mut Criterion) {
    let a = atom(42i32);
    c.bench_function("atom_get", |b| b.iter(|| black_box(a.get())));
}

fn bench_atom_reset_unwatched(c: &mut Criterion) {
    let a = atom(0i32);
    c.bench_function("atom_reset_unwatched", |b| {
        b.iter(|| {
            a.reset(black_box(42));
        })
    });
}

fn bench_atom_swap(c: &mut Criterion) {
    let a = atom(0u64);
    c.bench_function("atom_swap", |b| {
        b.iter(|| {
            a.swap(|n| black_box(n + 1));
        })
    });
}

// =============================================================================
// NOTIFICATION BENCHMARKS
// =============================================================================

fn bench_atom_reset_watched(c: &mut Criterion) {
    let mut group = c.benchmark_group("atom_reset_watched");
    for watch_count in [1usize, 8, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(watch_count),
            &watch_count,
            |b, &count| {
                let a = atom(0u64);
                let hits = Rc::new(Cell::new(0u64));
                for i in 0..count {
                    let hits = hits.clone();
                    a.add_watch(format!("watch-{i}"), move |_, _, _, _| {
                        hits.set(hits.get() + 1);
                    });
                }
                b.iter(|| {
                    a.reset(black_box(1));
                });
            },
        );
    }
    group.finish();
}

fn bench_atom_add_remove_watch(c: &mut Criterion) {
    let a = atom(0i32);
    c.bench_function("atom_add_remove_watch", |b| {
        b.iter(|| {
            a.add_watch("bench", |_, _, _, _| {});
            a.remove_watch("bench");
        })
    });
}

criterion_group!(
    benches,
    bench_atom_create,
    bench_atom_get,
    bench_atom_reset_unwatched,
    bench_atom_swap,
    bench_atom_reset_watched,
    bench_atom_add_remove_watch
);
criterion_main!(benches);
