//! Error types for the CLI

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Some parts produced no answer
    #[error("{0} part(s) failed")]
    PartsFailed(usize),
}

/// Why a single part produced no answer
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcRunError))]
pub enum RunError {
    /// Input file missing or unreadable
    #[error("{0}")]
    Input(#[from] aoc_solver::InputError),

    /// Parsing or solving failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}
