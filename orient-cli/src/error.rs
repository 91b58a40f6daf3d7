//! Error types emitted by the Orient CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use orient_core::CatalogError;
use orient_data::DataError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Errors emitted by the Orient CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading a catalog or profile file failed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// The built-in catalog failed validation.
    #[error("built-in catalog is invalid: {0}")]
    BuiltinCatalog(#[source] CatalogError),
    /// Input ended while the interview was waiting for an answer.
    #[error("input closed while waiting for {prompt}")]
    PromptClosed { prompt: &'static str },
    /// Reading answers or writing prompts failed.
    #[error("interview I/O failed: {0}")]
    Prompt(#[source] std::io::Error),
    /// Serialising JSON output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Installing the log subscriber failed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}
