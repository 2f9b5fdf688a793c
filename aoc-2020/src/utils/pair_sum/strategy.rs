//! Pair search strategies.

use std::cmp::Ordering;

/// Widened so sums near the `i64` limits compare correctly instead of overflowing.
#[inline]
pub(crate) fn wide_sum(values: &[i64]) -> i128 {
    values.iter().map(|&v| i128::from(v)).sum()
}

/// A way of finding two entries that add up to a target.
///
/// # Contract
///
/// A returned `(a, b)` satisfies `a <= b`, `a + b == target`, and `a` and `b`
/// come from two different positions of `numbers`. `None` means no such pair
/// exists. When several pairs qualify, strategies may disagree on which one
/// they report.
pub trait PairSumStrategy {
    /// Short name used in benchmark output
    fn name(&self) -> &'static str;

    /// Find a pair in `numbers` summing to `target`. `numbers` is left untouched.
    fn find_pair(&self, numbers: &[i64], target: i64) -> Option<(i64, i64)>;
}

/// Exhaustive O(n²) scan over every pair of positions.
///
/// Reports the pair whose first position is smallest, then whose second
/// position is smallest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BruteForce;

impl PairSumStrategy for BruteForce {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn find_pair(&self, numbers: &[i64], target: i64) -> Option<(i64, i64)> {
        let target = i128::from(target);
        numbers.iter().enumerate().find_map(|(x, &a)| {
            numbers[x + 1..]
                .iter()
                .find(|&&b| wide_sum(&[a, b]) == target)
                .map(|&b| (a.min(b), a.max(b)))
        })
    }
}

/// Sort, then close a window from both ends: O(n log n).
///
/// Works on a private sorted copy, so the caller's slice keeps its order. Use
/// [`two_pointer_in_place`] to skip the copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoPointer;

impl PairSumStrategy for TwoPointer {
    fn name(&self) -> &'static str {
        "two-pointer"
    }

    fn find_pair(&self, numbers: &[i64], target: i64) -> Option<(i64, i64)> {
        let mut sorted = numbers.to_vec();
        two_pointer_in_place(&mut sorted, target)
    }
}

/// Two-pointer scan that sorts `numbers` in place.
///
/// `numbers` is left sorted ascending whether or not a pair is found; callers
/// must not rely on its original order afterwards.
///
/// ```
/// use aoc_2020::utils::pair_sum::two_pointer_in_place;
///
/// let mut numbers = vec![1721, 979, 366, 299, 675, 1456];
/// assert_eq!(two_pointer_in_place(&mut numbers, 2020), Some((299, 1721)));
/// assert_eq!(numbers, vec![299, 366, 675, 979, 1456, 1721]);
/// ```
pub fn two_pointer_in_place(numbers: &mut [i64], target: i64) -> Option<(i64, i64)> {
    numbers.sort_unstable();
    let target = i128::from(target);

    let (mut left, mut right) = (0, numbers.len().checked_sub(1)?);
    while left < right {
        match wide_sum(&[numbers[left], numbers[right]]).cmp(&target) {
            Ordering::Equal => return Some((numbers[left], numbers[right])),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}
