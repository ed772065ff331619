//! Score command: annotate a dataset for the desert map.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, ARG_SEED, CliError, DEFAULT_SEED, ENV_SCORE_DATASET, load_annotated,
    require_existing, write_json,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Load a facility dataset, place each facility near its city \
                 and print every row with its desert score and marker size \
                 as JSON. The dataset path can come from the command line, \
                 configuration files, or environment variables.",
    about = "Annotate facilities with desert scores"
)]
#[ortho_config(prefix = "CEMPASUCHIL")]
pub(crate) struct ScoreArgs {
    /// Path to the facility dataset JSON export.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Seed for coordinate jitter; the same seed reproduces the same map.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl ScoreArgs {
    fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) seed: u64,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_SCORE_DATASET,
        })?;
        Ok(Self {
            dataset,
            seed: args.seed.unwrap_or(DEFAULT_SEED),
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_score_with(&config, writer)
}

pub(crate) fn run_score_with(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_existing(&config.dataset, ARG_DATASET)?;
    let (_, annotated) = load_annotated(&config.dataset, config.seed)?;
    info!("scored {} facilities from {}", annotated.len(), config.dataset);
    write_json(writer, &annotated)
}
