//! AOC CLI - Command-line interface for running Advent of Code 2023 solutions

mod cli;
mod config;
mod error;
mod input;
mod output;
mod runner;
mod scaffold;

// Import aoc-2023 to link the solver plugins
use aoc_2023 as _;

use aoc_runner::{Day, RegistryBuilder, SolverError, SolverRegistry};
use clap::Parser;
use cli::{Args, Command};
use config::{Config, ScaffoldPaths};
use error::CliError;
use input::{InputLoader, InputSet};
use output::OutputFormatter;
use scaffold::Scaffolder;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    let config = Config::from_args(&args);
    init_tracing(config.verbosity);

    if let Err(e) = run(args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, at a level picked by the number of `-v` flags
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(args: Args, config: &Config) -> Result<(), CliError> {
    tracing::debug!(?config, "resolved configuration");

    match args.command {
        Command::Run {
            day,
            test,
            example,
            quiet,
        } => {
            let set = if example {
                InputSet::Example
            } else {
                InputSet::Real
            };
            run_day(config, day, set, test, quiet)
        }
        Command::Create {
            day,
            template,
            solutions_dir,
        } => create_day(
            day,
            ScaffoldPaths::resolve(template.as_deref(), solutions_dir.as_deref()),
        ),
        Command::List => {
            let registry = build_registry()?;
            OutputFormatter::new(false).print_registry(registry.iter_info());
            Ok(())
        }
    }
}

/// Self-test the day, then solve every part over the selected input
fn run_day(
    config: &Config,
    day: Day,
    set: InputSet,
    test_only: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let registry = build_registry()?;
    if !registry.contains(day) {
        return Err(SolverError::NotFound(day).into());
    }

    let formatter = OutputFormatter::new(quiet);
    let outcome = registry.self_test(day)?;
    formatter.print_self_test(day, &outcome);
    if test_only {
        return Ok(());
    }

    let input = InputLoader::new(config.data_dir.clone()).load(day, set)?;
    let report = runner::run_day(&registry, day, &input)?;
    formatter.print_report(&report);
    Ok(())
}

fn create_day(day: Day, paths: ScaffoldPaths) -> Result<(), CliError> {
    let path = Scaffolder::new(paths).create(day)?;
    println!("Created new solution file: {}", path.display());
    println!("Add `pub mod day_{day};` to the solutions module to register it.");
    Ok(())
}

/// Build the registry from every linked solver plugin
fn build_registry() -> Result<SolverRegistry, CliError> {
    Ok(RegistryBuilder::new().register_all_plugins()?.build())
}
