//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import the solutions crate to link the solver plugins
use aoc_2020 as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use inputs::InputStore;
use output::OutputFormatter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only carries answers
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.verbosity);

    let registry = build_registry(&config.tags)?;
    info!(solvers = registry.len(), "registry built");

    let store = InputStore::new(config.input_source.clone());
    let executor = Executor::new(registry, store, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    for (year, day) in missing_inputs(&executor, &work_items) {
        warn!(year, day, "no input file, parts will be reported as failed");
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    let failures = results.iter().filter(|r| r.answer.is_err()).count();
    if failures > 0 {
        return Err(error::CliError::PartsFailed(failures));
    }
    Ok(())
}

/// Year/day pairs whose input file is missing
fn missing_inputs(executor: &Executor, work_items: &[executor::WorkItem]) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !executor.store().contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
