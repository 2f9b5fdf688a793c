use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, input};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::pair_sum::PairSumFinder;

/// Report Repair: find the expense entries that sum to 2020 and multiply them.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 1, tags = ["2020", "pair-sum"])]
pub struct Solver;

pub const TARGET: i64 = 2020;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input::parse_numbers(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b) = PairSumFinder::new()
            .find_pair(shared, TARGET)
            .ok_or_else(|| SolveError::failed(format!("no two entries sum to {}", TARGET)))?;
        debug!(a, b, "found pair");

        checked_product(&[a, b]).map(|p| p.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b, c) = PairSumFinder::new()
            .find_triplet(shared, TARGET)
            .ok_or_else(|| SolveError::failed(format!("no three entries sum to {}", TARGET)))?;
        debug!(a, b, c, "found triplet");

        checked_product(&[a, b, c]).map(|p| p.to_string())
    }
}

fn checked_product(values: &[i64]) -> Result<i64, SolveError> {
    values
        .iter()
        .try_fold(1i64, |acc, &v| {
            acc.checked_mul(v)
                .ok_or_else(|| anyhow!("product of {:?} overflows i64", values))
        })
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    #[test]
    fn test_example_part_1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "514579");
    }

    #[test]
    fn test_example_part_2() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "241861950");
    }

    #[test]
    fn test_parts_leave_entries_in_order() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        Solver::solve_part(&mut shared, 1).unwrap();
        assert_eq!(shared, vec![1721, 979, 366, 299, 675, 1456]);
    }

    #[test]
    fn test_no_pair() {
        let mut shared = Solver::parse("1\n2\n3\n").unwrap();
        let err = Solver::solve_part(&mut shared, 1).unwrap_err();
        assert_eq!(err.to_string(), "Solve failed: no two entries sum to 2020");
    }

    #[test]
    fn test_empty_input() {
        let mut shared = Solver::parse("").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            Solver::parse("1721\n97x\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_product_overflow() {
        let big = 1i64 << 40;
        let mut shared = vec![big, TARGET - big];
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut shared),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
