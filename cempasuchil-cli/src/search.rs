//! Search command: rank facilities against a question.

use std::io::Write;

use camino::Utf8PathBuf;
use cempasuchil_core::SelectionMode;
use cempasuchil_data::AnnotatedFacility;
use cempasuchil_scorer::filter_facilities;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, ARG_QUERY, ARG_SEED, CliError, DEFAULT_SEED, ENV_SEARCH_DATASET,
    ENV_SEARCH_QUERY, load_annotated, require_existing, write_json,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "search",
    long_about = "Load a facility dataset and rank its rows against a \
                 free-text question. Questions without usable keywords list \
                 the largest facilities instead.",
    about = "Rank facilities against a question"
)]
#[ortho_config(prefix = "CEMPASUCHIL")]
pub(crate) struct SearchArgs {
    /// Path to the facility dataset JSON export.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Free-text question, e.g. "Where can I find X-Ray facilities?".
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Seed for coordinate jitter.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl SearchArgs {
    fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) query: String,
    pub(crate) seed: u64,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_SEARCH_DATASET,
        })?;
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_SEARCH_QUERY,
        })?;
        Ok(Self {
            dataset,
            query,
            seed: args.seed.unwrap_or(DEFAULT_SEED),
        })
    }
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    mode: SelectionMode,
    facilities: Vec<SearchRow<'a>>,
}

#[derive(Debug, Serialize)]
struct SearchRow<'a> {
    #[serde(flatten)]
    facility: &'a AnnotatedFacility,
    #[serde(skip_serializing_if = "Option::is_none")]
    relevance: Option<u32>,
}

pub(crate) fn run_search(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_search_with(&config, writer)
}

pub(crate) fn run_search_with(
    config: &SearchConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.dataset, ARG_DATASET)?;
    let (dataset, annotated) = load_annotated(&config.dataset, config.seed)?;
    let selection = filter_facilities(&dataset, &config.query);
    info!(
        "search returned {} of {} facilities ({})",
        selection.len(),
        dataset.len(),
        selection.mode()
    );
    let facilities = selection
        .hits()
        .iter()
        .filter_map(|hit| {
            annotated.get(hit.index).map(|facility| SearchRow {
                facility,
                relevance: hit.relevance,
            })
        })
        .collect();
    write_json(
        writer,
        &SearchOutput {
            mode: selection.mode(),
            facilities,
        },
    )
}
