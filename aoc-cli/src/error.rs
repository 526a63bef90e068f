//! Error types for the CLI

use aoc_runner::{RegistrationError, SelfTestError, SolverError};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type; any of these ends the process with exit code 1
#[derive(Error, Debug)]
pub enum CliError {
    /// Solver lookup failed
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// The bundled examples did not check out
    #[error("Self-test failed: {0}")]
    SelfTest(#[from] SelfTestError),

    /// Input could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),

    /// A new day could not be scaffolded
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),
}

/// Input-loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file at the expected path
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scaffolding errors
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The day's solution file is already there
    #[error("{} already exists, refusing to overwrite", path.display())]
    AlreadyExists { path: PathBuf },

    /// The template to copy from is missing
    #[error("template not found: {}", path.display())]
    TemplateMissing { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single part; reported, but the other part still runs
#[derive(Error, Debug)]
pub enum PartError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("panicked: {0}")]
    Panicked(String),
}
