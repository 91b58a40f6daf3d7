//! Error types raised while loading catalogs and profiles.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use orient_core::{CatalogError, GradeError};
use thiserror::Error;

/// Errors raised while reading a catalog or profile from disk.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening the input file failed.
    #[error("failed to open {path}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file contents could not be turned into core records.
    #[error("failed to decode {path}")]
    Decode {
        /// Offending file path.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: DecodeError,
    },
}

/// Errors raised while decoding JSON documents into core records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The JSON was malformed or did not match the expected shape.
    #[error("invalid JSON document")]
    Json(#[source] serde_json::Error),
    /// A grade was not finite or off the `0..=20` scale.
    #[error("invalid grade for subject '{subject}' in '{owner}'")]
    InvalidGrade {
        /// Program id or learner name owning the grade.
        owner: String,
        /// Subject key as written in the document.
        subject: String,
        /// Validation failure.
        #[source]
        source: GradeError,
    },
    /// A grade map used an empty subject key.
    #[error("'{owner}' lists a grade under an empty subject")]
    BlankSubject {
        /// Program id or learner name owning the grade.
        owner: String,
    },
    /// The programs did not form a valid catalog.
    #[error("invalid catalog")]
    Catalog(#[source] CatalogError),
}
