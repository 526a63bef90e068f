//! Advent of Code runner library
//!
//! A small type-safe framework for per-day puzzle solutions. Each day is a solver with its own
//! input parsing and two parts that map the parsed input to an integer answer.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`PartSolver`], [`Solver`])
//! - A validated [`Day`] identifier
//! - Bundled [`Example`]s and a self-test that checks them ([`run_self_test`])
//! - An explicit registry mapping days to solvers ([`RegistryBuilder`], [`SolverRegistry`])
//! - Timed parsing ([`SolverRegistry::parse`]) and type-erased, timed solving through
//!   [`DynSolver`]
//!
//! # Quick Example
//!
//! ```
//! use aoc_runner::{Answer, AocParser, Day, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<Answer, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let day = Day::new(1).unwrap();
//! let registry = RegistryBuilder::new()
//!     .register_solver::<MyDay1>(day, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(day, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, 6);
//! ```
//!
//! # Derive Macros
//!
//! `#[derive(AocSolver)]` writes the [`Solver`] impl from [`PartSolver`] impls, and
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] so that
//! [`RegistryBuilder::register_all_plugins`] finds the day:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2, examples = EXAMPLES)]
//! #[aoc(day = 1, tags = ["parsing"])]
//! struct Day01;
//! ```

mod day;
mod error;
mod instance;
mod registry;
mod self_test;
mod solver;

pub use day::{DAYS_PER_EVENT, Day, DayError};
pub use error::{ParseError, RegistrationError, SelfTestError, SolveError, SolverError};
pub use instance::{DynSolver, ParseAttempt, ParsedDay, SolveResult, Timing};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SelfTestFn, SolverFactory, SolverPlugin,
    SolverRegistry,
};
pub use self_test::{ExampleCheck, SelfTestOutcome, run_self_test};
pub use solver::{Answer, AocParser, Example, PartSolver, Solver};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
