//! Finding entries that add up to a target sum.
//!
//! [`PairSumFinder`] answers two queries over a list of integers:
//!
//! - [`find_pair`](PairSumFinder::find_pair): two entries at distinct positions,
//!   reported as `(min, max)`, using a pluggable [`PairSumStrategy`]
//! - [`find_triplet`](PairSumFinder::find_triplet): three entries at distinct
//!   positions, reported in the deterministic search order of [`find_triplet`]
//!
//! "Not found" is an ordinary `None`, never an error.
//!
//! # Strategies
//!
//! - [`TwoPointer`] (default): sort a copy, then narrow a window from both ends. O(n log n).
//! - [`BruteForce`]: check every pair of positions. O(n²).
//!
//! When several pairs qualify the two may report different ones; both satisfy
//! the same contract.
//!
//! # Example
//!
//! ```
//! use aoc_2020::utils::pair_sum::{BruteForce, PairSumFinder};
//!
//! let report = [1721, 979, 366, 299, 675, 1456];
//!
//! let finder = PairSumFinder::new();
//! assert_eq!(finder.find_pair(&report, 2020), Some((299, 1721)));
//! assert_eq!(finder.find_triplet(&report, 2020), Some((979, 366, 675)));
//!
//! let brute = PairSumFinder::with_strategy(BruteForce);
//! assert_eq!(brute.find_pair(&report, 2020), Some((299, 1721)));
//! ```
//!
//! # Ownership
//!
//! The finder only borrows its input. [`two_pointer_in_place`] and
//! [`find_triplet_sorted`] avoid the copy by sorting the caller's slice.

mod strategy;
mod triplet;


pub use strategy::{BruteForce, PairSumStrategy, TwoPointer, two_pointer_in_place};
pub use triplet::{find_triplet, find_triplet_sorted};

/// Pair and triplet search over a list of integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairSumFinder<S = TwoPointer> {
    strategy: S,
}

impl PairSumFinder<TwoPointer> {
    /// Finder using the two-pointer strategy
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: PairSumStrategy> PairSumFinder<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Two entries at distinct positions with `a + b == target`, as `(a, b)` with `a <= b`
    pub fn find_pair(&self, numbers: &[i64], target: i64) -> Option<(i64, i64)> {
        self.strategy.find_pair(numbers, target)
    }

    /// Three entries at distinct positions summing to `target`; see [`find_triplet`]
    /// for which triple is reported
    pub fn find_triplet(&self, numbers: &[i64], target: i64) -> Option<(i64, i64, i64)> {
        find_triplet(numbers, target)
    }
}
