//! Recommend command implementation for the Orient CLI.

use std::io::{BufRead, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use orient_core::{DEFAULT_TOP_K, StudentProfile};
use orient_recommender::Recommender;
use orient_scorer::FitnessScorer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::interview::Interview;
use crate::render::{OutputFormat, write_recommendations};
use crate::sources::{load_catalog_or_builtin, require_existing};
use crate::{ARG_CATALOG, ARG_FORMAT, ARG_PROFILE, ARG_TOP_K, CliError};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank catalog programs for a learner. The learner comes from \
                 a JSON profile file or, when none is given, from an \
                 interactive interview. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank catalog programs for a learner"
)]
#[ortho_config(prefix = "ORIENT")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON learner profile; omit to answer questions instead.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Path to a JSON catalog; omit to use the built-in programs.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of programs to return (default 3).
    #[arg(long = ARG_TOP_K, value_name = "count")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Profile file, or `None` to run the interview.
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Catalog file, or `None` for the built-in catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) top_k: usize,
    pub(crate) format: OutputFormat,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if let Some(path) = &self.profile {
            require_existing(path, ARG_PROFILE)?;
        }
        if let Some(path) = &self.catalog {
            require_existing(path, ARG_CATALOG)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            profile: args.profile,
            catalog: args.catalog,
            top_k: args.top_k.unwrap_or(DEFAULT_TOP_K),
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    input: &mut dyn BufRead,
    prompts: &mut dyn Write,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, input, prompts, writer)
}

/// Rank the catalog and write the report to `writer`.
///
/// Interview prompts go to `prompts` so the report stays machine-readable.
pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    input: &mut dyn BufRead,
    prompts: &mut dyn Write,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = load_catalog_or_builtin(config.catalog.as_deref())?;
    let profile = resolve_profile(config, input, prompts)?;
    let recommendations =
        Recommender::new(FitnessScorer).recommend(&profile, catalog.programs(), config.top_k);
    write_recommendations(writer, config.format, &profile, &recommendations)
}

fn resolve_profile(
    config: &RecommendConfig,
    input: &mut dyn BufRead,
    prompts: &mut dyn Write,
) -> Result<StudentProfile, CliError> {
    match &config.profile {
        Some(path) => Ok(orient_data::load_profile(path)?),
        None => Interview::new(input, prompts).run(),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
