//! Catalog listing command.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{OutputFormat, write_catalog};
use crate::sources::{load_catalog_or_builtin, require_existing};
use crate::{ARG_CATALOG, ARG_FORMAT, CliError};

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the programs in a catalog")]
#[ortho_config(prefix = "ORIENT")]
pub(crate) struct CatalogArgs {
    /// Path to a JSON catalog; omit to list the built-in programs.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

pub(crate) fn run_catalog_with(args: CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    if let Some(path) = &merged.catalog {
        require_existing(path, ARG_CATALOG)?;
    }
    let catalog = load_catalog_or_builtin(merged.catalog.as_deref())?;
    write_catalog(writer, merged.format.unwrap_or_default(), &catalog)
}
