//! Property tests for `SolverExt::solve_part_checked_range`

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver with `N` parts that answers with the part number
struct Parts<const N: u8>;

impl<const N: u8> AocParser for Parts<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Parts<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => Parts::<1>::solve_part_checked_range(&mut (), part),
        2 => Parts::<2>::solve_part_checked_range(&mut (), part),
        _ => Parts::<3>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_range_check(max_parts in 1u8..=3, part in any::<u8>()) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }
}

#[test]
fn test_part_zero_rejected() {
    assert!(matches!(checked(2, 0), Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_part_past_max_rejected() {
    assert!(matches!(checked(2, 3), Err(SolveError::PartOutOfRange(3))));
}
