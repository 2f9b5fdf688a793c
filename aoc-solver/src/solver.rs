//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data shared by every part.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, input};
///
/// struct Expenses;
///
/// impl AocParser for Expenses {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input::parse_numbers(input)
///     }
/// }
///
/// assert_eq!(Expenses::parse("1\n2\n").unwrap(), vec![1, 2]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// Owned types are simplest; borrowing `&'a str` avoids a copy when the
    /// parts only need to scan the raw text.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement one of these per part and derive [`AocSolver`](crate::AocSolver)
/// to get the dispatching [`Solver`] impl for free.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError, input};
///
/// struct Expenses;
///
/// impl AocParser for Expenses {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input::parse_numbers(input)
///     }
/// }
///
/// impl PartSolver<1> for Expenses {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let mut shared = Expenses::parse("3 4").unwrap();
/// assert_eq!(<Expenses as PartSolver<1>>::solve(&mut shared).unwrap(), "7");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver: parsing plus a fixed number of parts.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, input};
///
/// struct Expenses;
///
/// impl AocParser for Expenses {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input::parse_numbers(input)
///     }
/// }
///
/// impl Solver for Expenses {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Expenses::parse("2 3 4").unwrap();
/// assert_eq!(Expenses::solve_part(&mut shared, 2).unwrap(), "24");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by the instance wrapper.
pub trait SolverExt: Solver {
    /// Reject parts outside `1..=PARTS` before delegating to `solve_part`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
