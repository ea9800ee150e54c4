//! Benchmarks for the workloads timed by the harness, measured properly with criterion rather than
//! a single wall-clock reading.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use structure_bench::collections::binary_tree::BinaryTreeSet;
use structure_bench::collections::contiguous::{Queue, Stack, Vector};
use structure_bench::collections::hash::HashTable;
use structure_bench::collections::linked::LinkedList;
use structure_bench::harness::{self, Datum, Operation, Workload};

const SIZES: [usize; 3] = [100, 1000, 5000];

const HASH_CAPACITY: usize = 5;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in SIZES {
        let data = harness::synthetic_data(size, 42);

        group.bench_with_input(BenchmarkId::new("Vector", size), &data, |bencher, data| {
            bencher.iter(|| black_box(data.iter().copied().collect::<Vector<_>>()));
        });

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &data, |bencher, data| {
            bencher.iter(|| black_box(data.iter().copied().collect::<LinkedList<_>>()));
        });

        group.bench_with_input(BenchmarkId::new("HashTable", size), &data, |bencher, data| {
            bencher.iter(|| {
                let mut table = HashTable::with_cap(HASH_CAPACITY);
                table.extend(data.iter().copied().enumerate());
                black_box(table)
            });
        });

        group.bench_with_input(BenchmarkId::new("BinaryTreeSet", size), &data, |bencher, data| {
            bencher.iter(|| black_box(data.iter().copied().collect::<BinaryTreeSet<_>>()));
        });
    }

    group.finish();
}

// =============================================================================
// search Benchmark
// =============================================================================

fn benchmark_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("search");

    for size in SIZES {
        let data = harness::synthetic_data(size, 42);
        let last = data.last().copied().unwrap_or_default();

        let vector: Vector<Datum> = data.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("Vector", size), &last, |bencher, last| {
            bencher.iter(|| black_box(vector.search(black_box(last))));
        });

        let list: LinkedList<Datum> = data.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("LinkedList", size), &last, |bencher, last| {
            bencher.iter(|| black_box(list.search(black_box(last))));
        });

        let mut table = HashTable::with_cap(HASH_CAPACITY);
        table.extend(data.iter().copied().enumerate());
        group.bench_with_input(BenchmarkId::new("HashTable", size), &(size - 1), |bencher, key| {
            bencher.iter(|| black_box(table.contains(black_box(key))));
        });

        let tree: BinaryTreeSet<Datum> = data.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("BinaryTreeSet", size), &last, |bencher, last| {
            bencher.iter(|| black_box(tree.contains(black_box(last))));
        });
    }

    group.finish();
}

// =============================================================================
// full API Benchmark
// =============================================================================

fn bench_full_api<W: Workload>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    data: &[Datum],
    make: impl Fn() -> W,
) {
    group.bench_with_input(BenchmarkId::new(name, data.len()), data, |bencher, data| {
        bencher.iter_batched(
            &make,
            |mut workload| {
                for op in Operation::ALL {
                    // Every operation succeeds when run in order over freshly inserted data.
                    let _ = black_box(workload.run(op, data));
                }
                workload
            },
            BatchSize::SmallInput,
        );
    });
}

fn benchmark_full_api(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("full_api");

    // Bubble, selection and insertion sorts are quadratic, so keep the data small.
    for size in [100, 500] {
        let data = harness::synthetic_data(size, 42);

        bench_full_api(&mut group, "Vector", &data, Vector::<Datum>::new);
        bench_full_api(&mut group, "Stack", &data, Stack::<Datum>::new);
        bench_full_api(&mut group, "Queue", &data, Queue::<Datum>::new);
        bench_full_api(&mut group, "LinkedList", &data, LinkedList::<Datum>::new);
        bench_full_api(&mut group, "HashTable", &data, || {
            HashTable::<usize, Datum>::with_cap(HASH_CAPACITY)
        });
        bench_full_api(&mut group, "BinaryTreeSet", &data, BinaryTreeSet::<Datum>::new);
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_search, benchmark_full_api);
criterion_main!(benches);
