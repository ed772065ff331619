//! Command-line interface for auditing health-facility datasets.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use cempasuchil_core::Dataset;
use cempasuchil_data::{AnnotatedFacility, CityLocator, annotate, load_dataset};
use cempasuchil_scorer::DesertScorer;
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod error;
mod score;
mod search;

pub use error::CliError;

use score::ScoreArgs;
use search::SearchArgs;

const ARG_DATASET: &str = "dataset";
const ARG_QUERY: &str = "query";
const ARG_SEED: &str = "seed";
const ENV_SCORE_DATASET: &str = "CEMPASUCHIL_CMDS_SCORE_DATASET";
const ENV_SEARCH_DATASET: &str = "CEMPASUCHIL_CMDS_SEARCH_DATASET";
const ENV_SEARCH_QUERY: &str = "CEMPASUCHIL_CMDS_SEARCH_QUERY";

/// Seed used for coordinate jitter when none is configured.
const DEFAULT_SEED: u64 = 42;

/// Run the Cempasuchil CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration, the dataset or the
/// output stream fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Score(args) => score::run_score(args, &mut stdout),
        Command::Search(args) => search::run_search(args, &mut stdout),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        debug!("logging already initialised: {err}");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cempasuchil",
    about = "Relevance search and medical desert scoring for health-facility datasets",
    version
)]
struct Cli {
    /// Log progress at info level (`RUST_LOG` overrides).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Annotate every facility with its desert score and map position.
    Score(ScoreArgs),
    /// Rank facilities against a free-text question.
    Search(SearchArgs),
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match cempasuchil_data::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn load_annotated(path: &Utf8Path, seed: u64) -> Result<(Dataset, Vec<AnnotatedFacility>), CliError> {
    let dataset = load_dataset(path)?;
    let annotated = annotate(
        &dataset,
        &DesertScorer::default(),
        &CityLocator::default(),
        seed,
    );
    Ok((dataset, annotated))
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(CliError::SerializeOutput)?;
    writeln!(writer).map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests;
