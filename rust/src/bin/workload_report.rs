//! Drives a sequential workload and a random workload through a fresh tree
//! and prints a `stats()` report for each. A thin harness, not a benchmark:
//! see `benches/comparison.rs` for timed comparisons against `BTreeMap`.

use std::time::Instant;

use bpptree::BppTreeMap;

fn report(label: &str, tree: &BppTreeMap<i64, i64>, elapsed: std::time::Duration) {
    let stats = tree.stats();
    println!("=== {label} ===");
    println!("  elapsed:            {elapsed:?}");
    println!("  size:               {}", stats.size);
    println!("  leaves:             {}", stats.leaves);
    println!("  height:             {}", stats.height);
    println!("  avg_utilization:    {:.3}", stats.avg_utilization);
    println!("  leaves_with_models: {}", stats.leaves_with_models);
    match stats.model_hit_rate {
        Some(rate) => println!("  model_hit_rate:     {rate:.3}"),
        None => println!("  model_hit_rate:     n/a"),
    }
}

fn sequential_workload(n: i64) -> (BppTreeMap<i64, i64>, std::time::Duration) {
    let mut tree = BppTreeMap::new(16, 32).unwrap();
    let start = Instant::now();
    for i in 0..n {
        tree.insert(i, i);
    }
    (tree, start.elapsed())
}

fn random_workload(n: i64, seed: u64) -> (BppTreeMap<i64, i64>, std::time::Duration) {
    let mut tree = BppTreeMap::new(16, 32).unwrap();
    let mut state = seed;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 1_000_000_000) as i64
    };
    let start = Instant::now();
    for _ in 0..n {
        let key = next();
        tree.insert(key, key);
    }
    (tree, start.elapsed())
}

fn main() {
    let (sequential, sequential_elapsed) = sequential_workload(1_000_000);
    report("sequential 1..1_000_000", &sequential, sequential_elapsed);

    let (random, random_elapsed) = random_workload(200_000, 0x9E3779B97F4A7C15);
    report("random 200_000 over [0, 1e9)", &random, random_elapsed);

    assert!(sequential.check_invariants().is_ok());
    assert!(random.check_invariants().is_ok());
}
