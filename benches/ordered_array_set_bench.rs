//! OrderedArraySet benchmarks.
//!
//! Measures append-only construction, navigation queries and range-view
//! materialization. Every query is a linear scan, so the probe sits in the
//! middle of the set to keep results comparable across sizes.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use navset::navigable::OrderedArraySet;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Pre-generates an ascending, even-valued set so odd probes are absent.
fn generate_set(size: i32) -> OrderedArraySet<i32> {
    OrderedArraySet::from_vec((0..size).map(|value| value * 2).collect())
}

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_array_set_add");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("add", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || (0..size).collect::<Vec<i32>>(),
                |elements| {
                    let mut set = OrderedArraySet::new();
                    for element in elements {
                        set.add(black_box(element));
                    }
                    black_box(set)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_navigation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_array_set_navigation");

    for size in SIZES {
        let set = generate_set(size);
        let present = size;
        let absent = size + 1;

        group.bench_with_input(BenchmarkId::new("lower_present", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.lower(black_box(&present))));
        });
        group.bench_with_input(BenchmarkId::new("floor_absent", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.floor(black_box(&absent))));
        });
        group.bench_with_input(BenchmarkId::new("ceiling_absent", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.ceiling(black_box(&absent))));
        });
        group.bench_with_input(BenchmarkId::new("higher_present", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.higher(black_box(&present))));
        });
    }

    group.finish();
}

fn benchmark_range_views(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_array_set_range_views");

    for size in SIZES {
        let set = generate_set(size);
        let quarter = size / 2;
        let three_quarters = size + size / 2;

        group.bench_with_input(BenchmarkId::new("sub_set", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.sub_set(black_box(&quarter), black_box(&three_quarters))));
        });
        group.bench_with_input(BenchmarkId::new("head_set", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.head_set(black_box(&size))));
        });
        group.bench_with_input(BenchmarkId::new("tail_set", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.tail_set(black_box(&size))));
        });
        group.bench_with_input(BenchmarkId::new("descending_set", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.descending_set()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_navigation,
    benchmark_range_views
);

criterion_main!(benches);
