//! Differential tests against `std::collections::BTreeMap` as the oracle,
//! over randomized and adversarial key sequences.

use std::collections::BTreeMap;

use bpptree::BppTreeMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_ops(seed: u64, n: usize) -> Vec<(i64, i64, bool)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let key = rng.gen_range(0..2000);
            let value = rng.gen::<i64>();
            let is_delete = rng.gen_ratio(1, 5);
            (key, value, is_delete)
        })
        .collect()
}

#[test]
fn matches_btreemap_under_random_insert_delete_workload() {
    let mut ours = BppTreeMap::<i64, i64>::new(6, 12).unwrap();
    let mut oracle = BTreeMap::<i64, i64>::new();

    for (key, value, is_delete) in random_ops(1, 20_000) {
        if is_delete {
            assert_eq!(ours.delete(&key), oracle.remove(&key).is_some());
        } else {
            assert_eq!(ours.insert(key, value), oracle.insert(key, value));
        }
    }

    assert_eq!(ours.stats().size, oracle.len());
    let ours_entries: Vec<(i64, i64)> = ours.iter().map(|(k, v)| (*k, *v)).collect();
    let oracle_entries: Vec<(i64, i64)> = oracle.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(ours_entries, oracle_entries);

    for key in oracle.keys() {
        assert_eq!(ours.search(key), oracle.get(key));
    }
    ours.check_invariants().unwrap();
}

#[test]
fn iter_is_strictly_ascending_across_many_seeds() {
    for seed in 0..8u64 {
        let mut ours = BppTreeMap::<i64, i64>::new(4, 8).unwrap();
        for (key, value, is_delete) in random_ops(seed, 3000) {
            if is_delete {
                ours.delete(&key);
            } else {
                ours.insert(key, value);
            }
        }
        let keys: Vec<i64> = ours.keys().copied().collect();
        for w in keys.windows(2) {
            assert!(w[0] < w[1], "iter() must be strictly ascending (seed {seed})");
        }
    }
}

#[test]
fn range_matches_filtered_iter_under_random_workload() {
    let mut ours = BppTreeMap::<i64, i64>::new(5, 10).unwrap();
    let mut oracle = BTreeMap::<i64, i64>::new();
    for (key, value, is_delete) in random_ops(7, 10_000) {
        if is_delete {
            oracle.remove(&key);
            ours.delete(&key);
        } else {
            oracle.insert(key, value);
            ours.insert(key, value);
        }
    }

    for &(lo, hi) in &[(0, 500), (500, 1500), (1999, 2001), (10, 5)] {
        let ours_range: Vec<(i64, i64)> = ours.range(lo, hi).map(|(k, v)| (*k, *v)).collect();
        let oracle_range: Vec<(i64, i64)> = oracle
            .iter()
            .filter(|(k, _)| **k >= lo && **k <= hi)
            .map(|(k, v)| (*k, *v))
            .collect();
        assert_eq!(ours_range, oracle_range);
    }
}

#[test]
fn reinsert_never_changes_size() {
    let mut ours = BppTreeMap::<i64, i64>::new(4, 8).unwrap();
    ours.insert(1, 100);
    ours.insert(2, 200);
    let size_before = ours.stats().size;
    ours.insert(1, 999);
    assert_eq!(ours.stats().size, size_before);
    assert_eq!(ours.search(&1), Some(&999));
}

#[test]
fn insert_then_delete_restores_prior_key_set() {
    let mut ours = BppTreeMap::<i64, i64>::new(4, 8).unwrap();
    for k in 1..=50 {
        ours.insert(k, k);
    }
    let before: Vec<i64> = ours.keys().copied().collect();

    ours.insert(9999, 9999);
    ours.delete(&9999);

    let after: Vec<i64> = ours.keys().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn delete_of_every_key_leaves_leaves_present_but_empty() {
    let mut ours = BppTreeMap::<i64, i64>::new(4, 8).unwrap();
    for k in 1..=300 {
        ours.insert(k, k);
    }
    for k in 1..=300 {
        assert!(ours.delete(&k));
    }
    assert_eq!(ours.stats().size, 0);
    assert!(ours.is_empty());
    ours.check_invariants().unwrap();
}
