//! Explain command: score components for every program.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use orient_core::{Catalog, StudentProfile};
use orient_scorer::{FitnessScorer, ScoreBreakdown};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{OutputFormat, write_explanation};
use crate::sources::{load_catalog_or_builtin, require_existing};
use crate::{ARG_CATALOG, ARG_FORMAT, ARG_PROFILE, CliError, ENV_EXPLAIN_PROFILE};

/// CLI arguments for the `explain` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the grade, interest and aspiration components behind \
                 each program's fitness score, in catalog order.",
    about = "Show the score components for every program"
)]
#[ortho_config(prefix = "ORIENT")]
pub(crate) struct ExplainArgs {
    /// Path to a JSON learner profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Path to a JSON catalog; omit to use the built-in programs.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

/// Resolved `explain` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExplainConfig {
    pub(crate) profile: Utf8PathBuf,
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) format: OutputFormat,
}

impl TryFrom<ExplainArgs> for ExplainConfig {
    type Error = CliError;

    fn try_from(args: ExplainArgs) -> Result<Self, Self::Error> {
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE,
            env: ENV_EXPLAIN_PROFILE,
        })?;
        Ok(Self {
            profile,
            catalog: args.catalog,
            format: args.format.unwrap_or_default(),
        })
    }
}

impl ExplainConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.profile, ARG_PROFILE)?;
        if let Some(path) = &self.catalog {
            require_existing(path, ARG_CATALOG)?;
        }
        Ok(())
    }
}

pub(crate) fn run_explain_with(args: ExplainArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = ExplainConfig::try_from(merged)?;
    config.validate_sources()?;
    let profile = orient_data::load_profile(&config.profile)?;
    let catalog = load_catalog_or_builtin(config.catalog.as_deref())?;
    let breakdowns = breakdowns(&profile, &catalog);
    write_explanation(writer, config.format, &profile, &catalog, &breakdowns)
}

/// Score components per program, in catalog order.
pub(crate) fn breakdowns(profile: &StudentProfile, catalog: &Catalog) -> Vec<ScoreBreakdown> {
    catalog
        .iter()
        .map(|program| FitnessScorer.breakdown(profile, program))
        .collect()
}
