//! Benchmark comparing pair-sum strategies.
//!
//! Run with: cargo run --example pair_sum_benchmark --release [-- path/to/input.txt]
//!
//! With a path, the numbers in that file are searched for a pair summing to
//! 2020. Without one, random lists are generated whose only qualifying pair is
//! planted at a random position, so every strategy has the same answer.

use aoc_2020::utils::pair_sum::{
    BruteForce, PairSumStrategy, TwoPointer, find_triplet, find_triplet_sorted,
    two_pointer_in_place,
};
use aoc_solver::input;
use std::time::{Duration, Instant};

const TARGET: i64 = 2020;
const SIZES: [usize; 4] = [200, 1_000, 5_000, 20_000];
const ROUNDS: u32 = 20;

/// Simple LCG random number generator for reproducibility
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.0 >> 17
    }
}

/// Values above the target, except for one planted pair, so no other pair can qualify
fn generate_inputs(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = Lcg(seed);
    let mut numbers: Vec<i64> = (0..count)
        .map(|_| TARGET + 1 + (rng.next() % 1_000_000) as i64)
        .collect();

    let low = (rng.next() % TARGET as u64) as i64;
    let first = rng.next() as usize % count;
    let second = (first + 1 + rng.next() as usize % (count - 1)) % count;
    numbers[first] = low;
    numbers[second] = TARGET - low;
    numbers
}

fn time_rounds<F: FnMut() -> Option<(i64, i64)>>(mut f: F) -> (Duration, Option<(i64, i64)>) {
    let mut result = None;
    let start = Instant::now();
    for _ in 0..ROUNDS {
        result = f();
    }
    (start.elapsed() / ROUNDS, result)
}

fn bench_pairs(numbers: &[i64]) {
    let strategies: [&dyn PairSumStrategy; 2] = [&BruteForce, &TwoPointer];

    let mut results = Vec::new();
    for strategy in strategies {
        let (elapsed, found) = time_rounds(|| strategy.find_pair(numbers, TARGET));
        println!("  {:<22} {:>12?}  {:?}", strategy.name(), elapsed, found);
        results.push(found);
    }

    let (elapsed, found) = time_rounds(|| {
        let mut scratch = numbers.to_vec();
        two_pointer_in_place(&mut scratch, TARGET)
    });
    println!("  {:<22} {:>12?}  {:?}", "two-pointer (in place)", elapsed, found);
    results.push(found);

    if results.windows(2).all(|w| w[0] == w[1]) {
        println!("  ✓ All strategies agree");
    } else {
        println!("  ✗ Strategies disagree!");
    }
}

fn bench_triplets(numbers: &[i64]) {
    let start = Instant::now();
    let reference = find_triplet(numbers, TARGET);
    let reference_time = start.elapsed();

    let mut scratch = numbers.to_vec();
    let start = Instant::now();
    let sorted = find_triplet_sorted(&mut scratch, TARGET);
    let sorted_time = start.elapsed();

    println!("  {:<22} {:>12?}  {:?}", "triplet (search order)", reference_time, reference);
    println!("  {:<22} {:>12?}  {:?}", "triplet (sorted)", sorted_time, sorted);
}

fn main() {
    println!("Pair Sum Strategy Benchmark");
    println!("===========================");

    if let Some(path) = std::env::args().nth(1) {
        let numbers = match input::read_numbers(&path) {
            Ok(numbers) => numbers,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        println!("\n{} ({} entries), target {}", path, numbers.len(), TARGET);
        bench_pairs(&numbers);
        bench_triplets(&numbers);
        return;
    }

    for (i, &size) in SIZES.iter().enumerate() {
        let numbers = generate_inputs(42 + i as u64, size);
        println!("\n{} random entries, target {}", size, TARGET);
        bench_pairs(&numbers);
    }

    // Triplet search is cubic; keep the list small
    let numbers = generate_inputs(7, 200);
    println!("\n200 random entries, triplets");
    bench_triplets(&numbers);
}
