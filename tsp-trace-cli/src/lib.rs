//! Command-line interface for the tsp-trace engine.
//!
//! `tsp-trace solve <instance.json>` loads a distance matrix or a point set,
//! runs the selected solvers and prints a JSON report per algorithm.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use env_logger::{Builder, Env, Target, WriteStyle};

mod error;
mod fs;
mod instance;
mod solve;

pub use error::CliError;

use solve::{SolveArgs, run_solve};

pub(crate) const ARG_INSTANCE: &str = "instance";
pub(crate) const ARG_ALGORITHM: &str = "algorithm";
pub(crate) const ARG_NO_STEPS: &str = "no-steps";
pub(crate) const ENV_INSTANCE: &str = "TSP_TRACE_CMDS_SOLVE_INSTANCE_PATH";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TSP_TRACE_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging()?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

/// Install `env_logger` on stderr, filtered by [`LOG_ENV`].
pub fn init_logging() -> Result<(), CliError> {
    Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_LOG_FILTER))
        .write_style(WriteStyle::Never)
        .format_timestamp_millis()
        .target(Target::Stderr)
        .try_init()
        .map_err(CliError::Logging)
}

#[derive(Debug, Parser)]
#[command(
    name = "tsp-trace",
    about = "Solve TSP instances and trace every algorithm step",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve an instance with one or all algorithms.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
