//! Command-line interface for the Orient recommendation engine.
#![forbid(unsafe_code)]

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod explain;
mod interview;
mod recommend;
mod render;
mod sources;
mod telemetry;

pub use error::CliError;
pub use render::OutputFormat;
pub use telemetry::TelemetryError;

use catalog::{CatalogArgs, run_catalog_with};
use explain::{ExplainArgs, run_explain_with};
use recommend::{RecommendArgs, run_recommend_with};

pub(crate) const ARG_PROFILE: &str = "profile";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_TOP_K: &str = "top-k";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_LOG_LEVEL: &str = "log-level";
pub(crate) const ENV_EXPLAIN_PROFILE: &str = "ORIENT_CMDS_EXPLAIN_PROFILE";

/// Run the Orient CLI with the current process arguments and environment.
///
/// Answers are read from stdin, prompts go to stderr and every report is
/// written to stdout.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading, the interview or writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    telemetry::init(cli.log_level.as_deref())?;
    let mut stdin = std::io::stdin().lock();
    let mut stderr = std::io::stderr().lock();
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdin, &mut stderr, &mut stdout)
}

fn dispatch(
    command: Command,
    input: &mut dyn BufRead,
    prompts: &mut dyn Write,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend_with(args, input, prompts, writer),
        Command::Catalog(args) => run_catalog_with(args, writer),
        Command::Explain(args) => run_explain_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "orient",
    about = "Recommend study programs that fit a learner's grades and interests",
    version
)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset (defaults to `warn`).
    #[arg(long = ARG_LOG_LEVEL, value_name = "filter", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog programs for a learner.
    Recommend(RecommendArgs),
    /// List the programs in a catalog.
    Catalog(CatalogArgs),
    /// Show the score components for every program.
    Explain(ExplainArgs),
}

#[cfg(test)]
mod tests;
