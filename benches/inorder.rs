//! Building an ordered tree from values with duplicates and draining it in
//! ascending order, measured against `BTreeMap` used as a counted multiset.

use std::collections::BTreeMap;

use rand::prelude::*;
use rand::seq::SliceRandom;
use criterion::{
    BenchmarkId,
    Criterion,
    black_box,
    criterion_group,
    criterion_main,
};

use ordtree::OrderedTree;

/// Randomly generate values to insert, with each value appearing roughly four
/// times so that duplicate handling is part of the measurement
fn generate_values(len: usize) -> Vec<i64> {
    // Use seed to make this deterministic
    let mut rng = StdRng::seed_from_u64(87646412);

    let mut values: Vec<i64> = (0..len as i64 / 4).cycle().take(len).collect();

    // Put the values in a random order
    for _ in 0..5 {
        values.shuffle(&mut rng);
    }

    values
}

fn build_tree(values: &[i64]) -> OrderedTree<i64> {
    let mut tree = OrderedTree::with_capacity(values.len());
    for &value in values {
        tree.insert(value);
    }
    tree
}

fn build_multiset(values: &[i64]) -> BTreeMap<i64, usize> {
    let mut multiset = BTreeMap::new();
    for &value in values {
        *multiset.entry(value).or_insert(0) += 1;
    }
    multiset
}

pub fn bench_build(c: &mut Criterion) {
    const SIZES: &[usize] = &[100, 1000, 10000];

    let mut group = c.benchmark_group("inorder build");
    for &size in SIZES {
        let values = generate_values(size);

        group.bench_with_input(BenchmarkId::new("OrderedTree", size), &values, |b, values| {
            b.iter(|| black_box(build_tree(values)))
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &values, |b, values| {
            b.iter(|| black_box(build_multiset(values)))
        });
    }
    group.finish();
}

pub fn bench_drain(c: &mut Criterion) {
    const SIZES: &[usize] = &[100, 1000, 10000];

    let mut group = c.benchmark_group("inorder drain");
    for &size in SIZES {
        let values = generate_values(size);

        let tree = build_tree(&values);
        group.bench_with_input(BenchmarkId::new("OrderedTree", size), &tree, |b, tree| {
            b.iter(|| {
                let mut total = 0i64;
                for &value in tree.iter_inorder() {
                    total = total.wrapping_add(value);
                }
                black_box(total)
            })
        });

        let multiset = build_multiset(&values);
        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &multiset, |b, multiset| {
            b.iter(|| {
                let mut total = 0i64;
                for (&value, &count) in multiset.iter() {
                    total = total.wrapping_add(value.wrapping_mul(count as i64));
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_build,
    bench_drain,
);

criterion_main!(benches);
