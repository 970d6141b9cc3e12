//! Benchmarks for the TypeStore.
//!
//! Run with: `cargo bench --bench type_store` in the types/ directory.
//!
//! Benchmark groups:
//! 1. function_creation: Building function types that are not interned yet
//! 2. function_interning: Asking again for an already-interned function type
//! 3. sum_canonicalization: Interning sums from shuffled, duplicated members
//! 4. name_lookup: Binary search over the display-name index

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ilang_types::{NumericFamily, TypeHandle, TypeStore};
use pprof::criterion::{Output, PProfProfiler};

/// Interns one sized type per family and width, `count` types in total.
fn sized_pool(store: TypeStore<'_>, count: usize) -> (TypeStore<'_>, Vec<TypeHandle<'_>>) {
    let mut store = store;
    let mut pool = Vec::with_capacity(count);
    for i in 0..count {
        let family = NumericFamily::ALL[i % NumericFamily::COUNT];
        let bits = 8 * (1 + (i / NumericFamily::COUNT) as u32);
        let (next, ty) = store.get_sized_type(family, bits);
        store = next;
        pool.push(ty);
    }
    (store, pool)
}

/// Benchmark: Creating new function types with N parameters.
///
/// Each iteration uses a fresh arena, so every request misses the index and
/// pays for naming, arena allocation and sorted insertion.
fn bench_function_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("function_creation");

    for num_params in [1, 4, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_params),
            &num_params,
            |b, &num_params| {
                b.iter(|| {
                    let arena = Bump::new();
                    let (store, pool) = sized_pool(TypeStore::new(&arena), num_params + 1);
                    let (params, result) = pool.split_at(num_params);
                    let (_store, func) = store.get_function_type(params, result[0]);
                    black_box(func.map(|ty| ty.signature().len()))
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: Getting an already-interned function type.
fn bench_function_interning(c: &mut Criterion) {
    let mut group = c.benchmark_group("function_interning");

    for num_params in [1, 4, 16] {
        let arena = Bump::new();
        let (store, pool) = sized_pool(TypeStore::new(&arena), num_params + 1);
        let (params, result) = pool.split_at(num_params);
        let (store, _) = store.get_function_type(params, result[0]);
        let mut slot = Some(store);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_params),
            &num_params,
            |b, _| {
                b.iter(|| {
                    let store = slot.take().unwrap();
                    let (store, func) = store.get_function_type(black_box(params), result[0]);
                    slot = Some(store);
                    black_box(func)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: Interning a sum whose members arrive shuffled and repeated.
fn bench_sum_canonicalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_canonicalization");

    for num_members in [2, 8, 32] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_members),
            &num_members,
            |b, &num_members| {
                b.iter(|| {
                    let arena = Bump::new();
                    let (store, mut pool) = sized_pool(TypeStore::new(&arena), num_members);
                    pool.reverse();
                    pool.extend_from_within(..num_members / 2);
                    let (_store, sum) = store.get_sum_type(&pool);
                    black_box(sum.map(|ty| ty.components().len()))
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: Finding a type by display name in a populated store.
fn bench_name_lookup(c: &mut Criterion) {
    let arena = Bump::new();
    let (store, _) = sized_pool(TypeStore::new(&arena), 256);

    c.bench_function("name_lookup", |b| {
        b.iter(|| black_box(store.find_type_by_name(black_box("Integer64"))))
    });
}

// Configure Criterion with profiling support
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = bench_function_creation, bench_function_interning, bench_sum_canonicalization,
              bench_name_lookup
}
criterion_main!(benches);
