use std::collections::BTreeMap;

use bpptree::BppTreeMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const N: i64 = 20_000;

fn insertion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    group.bench_function("bpptree_sequential", |b| {
        b.iter(|| {
            let mut tree = BppTreeMap::new(16, 32).unwrap();
            for i in 0..N {
                tree.insert(black_box(i), i);
            }
            black_box(tree);
        })
    });

    group.bench_function("btreemap_sequential", |b| {
        b.iter(|| {
            let mut tree = BTreeMap::new();
            for i in 0..N {
                tree.insert(black_box(i), i);
            }
            black_box(tree);
        })
    });

    group.finish();
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let mut our_tree = BppTreeMap::new(16, 32).unwrap();
    let mut std_tree = BTreeMap::new();
    for i in 0..N {
        our_tree.insert(i, i);
        std_tree.insert(i, i);
    }
    let probes: Vec<i64> = (0..N).step_by(7).collect();

    group.bench_function("bpptree_point_lookup", |b| {
        b.iter(|| {
            for k in &probes {
                black_box(our_tree.search(black_box(k)));
            }
        })
    });

    group.bench_function("btreemap_point_lookup", |b| {
        b.iter(|| {
            for k in &probes {
                black_box(std_tree.get(black_box(k)));
            }
        })
    });

    group.finish();
}

fn range_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_queries");

    let mut our_tree = BppTreeMap::new(16, 32).unwrap();
    let mut std_tree = BTreeMap::new();
    for i in 0..N {
        our_tree.insert(i, i);
        std_tree.insert(i, i);
    }

    group.bench_function("bpptree_small_range", |b| {
        b.iter(|| {
            let items: Vec<_> = our_tree.range(black_box(9_900), black_box(10_100)).collect();
            black_box(items);
        })
    });

    group.bench_function("btreemap_small_range", |b| {
        b.iter(|| {
            let items: Vec<_> = std_tree.range(black_box(9_900)..=black_box(10_100)).collect();
            black_box(items);
        })
    });

    group.finish();
}

criterion_group!(benches, insertion_benchmark, lookup_benchmark, range_benchmark);
criterion_main!(benches);
