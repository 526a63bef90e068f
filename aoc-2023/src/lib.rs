//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Each day in [`solutions`] derives `AutoRegisterSolver`, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find it. Shared helpers live in [`utils`].

pub mod solutions;
pub mod utils;
