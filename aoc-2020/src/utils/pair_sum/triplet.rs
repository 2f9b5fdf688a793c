//! Three-entry search.

use super::strategy::wide_sum;
use std::cmp::Ordering;

/// Find three entries at distinct positions summing to `target`.
///
/// Positions are visited as `x` ascending, then `y`, then `z`, over every
/// combination of three distinct positions, and the first match is returned
/// as `(numbers[x], numbers[y], numbers[z])`. Restricting to `x < y < z`
/// yields the same first match as walking every ordered triple: a match
/// using an earlier position would have been reached with that position
/// outermost.
///
/// O(n³).
///
/// ```
/// use aoc_2020::utils::pair_sum::find_triplet;
///
/// let numbers = [1721, 979, 366, 299, 675, 1456];
/// assert_eq!(find_triplet(&numbers, 2020), Some((979, 366, 675)));
/// ```
pub fn find_triplet(numbers: &[i64], target: i64) -> Option<(i64, i64, i64)> {
    let target = i128::from(target);
    let n = numbers.len();

    for x in 0..n {
        for y in x + 1..n {
            for z in y + 1..n {
                let (a, b, c) = (numbers[x], numbers[y], numbers[z]);
                if wide_sum(&[a, b, c]) == target {
                    return Some((a, b, c));
                }
            }
        }
    }
    None
}

/// Sort `numbers` in place, then fix the smallest entry and run a two-pointer
/// scan over the rest. O(n²).
///
/// The triple comes back ascending, which is generally *not* the triple or
/// the order [`find_triplet`] reports. Use it when only the values matter
/// (their product, say).
///
/// ```
/// use aoc_2020::utils::pair_sum::find_triplet_sorted;
///
/// let mut numbers = vec![1721, 979, 366, 299, 675, 1456];
/// assert_eq!(find_triplet_sorted(&mut numbers, 2020), Some((366, 675, 979)));
/// ```
pub fn find_triplet_sorted(numbers: &mut [i64], target: i64) -> Option<(i64, i64, i64)> {
    numbers.sort_unstable();
    let target = i128::from(target);
    let n = numbers.len();

    for x in 0..n.saturating_sub(2) {
        let (mut left, mut right) = (x + 1, n - 1);
        while left < right {
            let values = [numbers[x], numbers[left], numbers[right]];
            match wide_sum(&values).cmp(&target) {
                Ordering::Equal => return Some((values[0], values[1], values[2])),
                Ordering::Less => left += 1,
                Ordering::Greater => right -= 1,
            }
        }
    }
    None
}
