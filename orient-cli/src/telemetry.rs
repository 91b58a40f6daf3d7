//! Log subscriber installation for the CLI.
//!
//! Library crates log through the `log` facade; the fmt subscriber's
//! `tracing-log` bridge forwards those records to stderr.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Filter applied when neither `RUST_LOG` nor `--log-level` is set.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The requested filter directive could not be parsed.
    #[error("invalid log level/filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Build the filter, preferring `RUST_LOG` over the requested level.
pub(crate) fn env_filter(level: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let value = level.unwrap_or(DEFAULT_LOG_LEVEL);
    EnvFilter::try_new(value).map_err(|source| TelemetryError::EnvFilter {
        value: value.to_owned(),
        source,
    })
}

/// Install a compact stderr subscriber.
pub(crate) fn init(level: Option<&str>) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
