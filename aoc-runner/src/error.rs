//! Error types for the runner library

use crate::day::Day;
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds `Solver::PARTS`)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given day
    #[error("no solution available for day {0}")]
    NotFound(Day),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a day that already has one
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(Day),
    /// The plugin names a day outside 1-25
    #[error("Invalid day {0} for solver registration")]
    InvalidDay(u8),
}

/// A self-test could not run or an example did not produce its expected answer
#[derive(Debug, Error)]
pub enum SelfTestError {
    /// No solver registered for the given day
    #[error("no solution available for day {0}")]
    NotFound(Day),
    /// The example was solved, but the answer differs
    #[error("example {index} for part {part}: expected {expected}, got {actual}")]
    Mismatch {
        index: usize,
        part: u8,
        expected: i64,
        actual: i64,
    },
    /// Parsing or solving the example failed
    #[error("example {index} for part {part} failed: {source}")]
    Failed {
        index: usize,
        part: u8,
        #[source]
        source: SolverError,
    },
}
