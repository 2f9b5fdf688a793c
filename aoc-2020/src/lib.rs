//! Advent of Code 2020 puzzle solutions with automatic registration
//!
//! Solutions live under `my_solutions`, one module per day, and register
//! themselves with the solver framework through `AutoRegisterSolver`.
//! Reusable search code lives in [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
