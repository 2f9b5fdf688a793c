//! Parsed solver instances and the type-erased `DynSolver` interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Answer for one part together with when solving started and ended
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle for one year/day, ready to solve any of its parts.
///
/// Parsing happens once in [`SolverInstance::new`]; every part then works on
/// the same shared data, so part 2 sees whatever part 1 left behind.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long it took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();
        debug!(year, day, bytes = input.len(), "parsed puzzle input");

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    /// Borrow the parsed data.
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Type-erased interface over [`SolverInstance`] so the registry can hand out
/// solvers of different types.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {part}: {} ({:?})", result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the call
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();
        debug!(year = self.year, day = self.day, part, "solved part");

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input;

    struct Summer;

    impl crate::AocParser for Summer {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input::parse_numbers(input)
        }
    }

    impl Solver for Summer {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<i64>().to_string())
        }
    }

    #[test]
    fn test_instance_records_metadata() {
        let instance = SolverInstance::<Summer>::new(2020, 1, "1 2 3").unwrap();
        assert_eq!(instance.year(), 2020);
        assert_eq!(instance.day(), 1);
        assert_eq!(instance.parts(), 1);
        assert_eq!(instance.shared(), &vec![1, 2, 3]);
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_solve_through_dyn_solver() {
        let mut instance = SolverInstance::<Summer>::new(2020, 1, "1 2 3").unwrap();
        let solver: &mut dyn DynSolver = &mut instance;
        let result = solver.solve(1).unwrap();
        assert_eq!(result.answer, "6");
        assert!(result.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_solve_rejects_out_of_range_part() {
        let mut instance = SolverInstance::<Summer>::new(2020, 1, "1").unwrap();
        assert!(matches!(
            instance.solve(2),
            Err(SolveError::PartOutOfRange(2))
        ));
    }

    #[test]
    fn test_parse_failure_surfaces() {
        let result = SolverInstance::<Summer>::new(2020, 1, "1 two");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
