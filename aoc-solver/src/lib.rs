//! Advent of Code Solver Library
//!
//! A small framework for writing Advent of Code solvers: each puzzle parses its
//! input once into shared data, then answers a fixed number of parts.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the data every part works on
//! - [`PartSolver<N>`] solves one part; [`Solver`] dispatches over all of them
//! - [`SolverInstance`] / [`DynSolver`] wrap a parsed puzzle behind dynamic dispatch,
//!   with parse and solve timings
//! - [`RegistryBuilder`] / [`SolverRegistry`] map year/day to solver factories,
//!   fed by hand or by [`SolverPlugin`]s collected through `inventory`
//! - [`input`] reads puzzle files and splits them into integers
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError, input};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input::parse_numbers(input)
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Sums>(2020, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2020, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] so the solver is picked up by
//! [`RegistryBuilder::register_all_plugins`]:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2020, day = 1, tags = ["2020", "pair-sum"])]
//! pub struct Solver;
//! ```

mod error;
pub mod input;
mod instance;
mod registry;
mod solver;

pub use error::{InputError, ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
