//! CLI argument parsing using clap

use aoc_runner::Day;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code 2023 solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2023 solutions", version)]
pub struct Args {
    /// Directory holding `inputs/` and `examples/` [default: $AOC_DATA_DIR, then ./data]
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Self-test a day against its examples, then solve both parts
    Run {
        /// Day to run (1-25)
        day: Day,

        /// Stop after the self-test
        #[arg(long)]
        test: bool,

        /// Read the example input set instead of the real input
        #[arg(long)]
        example: bool,

        /// Quiet mode - only output answers
        #[arg(short, long)]
        quiet: bool,
    },

    /// Create a new solution file for a day from the template
    Create {
        /// Day to create (1-25)
        day: Day,

        /// Template to copy [default: aoc-2023/templates/day.rs.tmpl]
        #[arg(long)]
        template: Option<PathBuf>,

        /// Directory receiving `day_DD.rs` [default: aoc-2023/src/solutions]
        #[arg(long)]
        solutions_dir: Option<PathBuf>,
    },

    /// List the registered days
    List,
}
