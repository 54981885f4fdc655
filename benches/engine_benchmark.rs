#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for aggregation and treemap layout at large item counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use diskviz::prelude::*;
use std::hint::black_box;

fn make_items(count: usize) -> Vec<WeightedItem> {
    // Deterministic long-tail distribution, heaviest first.
    (0..count)
        .map(|i| {
            let weight = 1_000_000_000_u64 / (i as u64 + 1) + (i as u64 % 13) * 1_024;
            WeightedItem::new(format!("item-{i}"), weight, i)
        })
        .collect()
}

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 1_000, 10_000, 100_000] {
        let items = make_items(size);
        let total: u64 = items.iter().map(|i| i.weight).sum();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| aggregate(black_box(&items), total, 15, 1.0));
        });
    }

    group.finish();
}

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("treemap_layout");

    for size in [12, 100, 1_000] {
        let items = make_items(size);
        let total: u64 = items.iter().map(|i| i.weight).sum();
        let aggregated = annotate(&items, total);
        let layout = TreemapLayout::new().canvas(1280.0, 800.0).padding(3.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| layout.layout(black_box(&aggregated)));
        });
    }

    group.finish();
}

fn list_window_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_window");

    let items = make_items(100_000);
    let total: u64 = items.iter().map(|i| i.weight).sum();
    let annotated = annotate(&items, total);

    group.bench_function("page_20_of_100k", |b| {
        b.iter(|| page_window(black_box(&annotated), 2_500, 20));
    });

    group.finish();
}

criterion_group!(
    benches,
    aggregate_benchmark,
    layout_benchmark,
    list_window_benchmark
);
criterion_main!(benches);
