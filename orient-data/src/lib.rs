//! Catalog and profile sources for the Orient engine.
//!
//! The crate supplies the inputs the core consumes:
//! - [`builtin_catalog`] returns the example programs shipped with the
//!   engine.
//! - [`load_catalog`] and [`load_profile`] read JSON documents from disk,
//!   normalising keywords (trimmed, lowercased) and validating grades before
//!   building core records.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use orient_data::{load_catalog, load_profile};
//!
//! let catalog = load_catalog(Utf8Path::new("data/catalog.json")).expect("load catalog");
//! let profile = load_profile(Utf8Path::new("data/alice.json")).expect("load profile");
//! assert!(!catalog.is_empty());
//! assert!(!profile.name().is_empty());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builtin;
mod documents;
mod error;

use std::io::{BufReader, Read};

use camino::Utf8Path;
use orient_core::{Catalog, StudentProfile};
use orient_fs::open_utf8_file;

pub use builtin::{SUBJECTS, builtin_catalog, builtin_programs};
pub use documents::{ProfileDocument, ProgramDocument};
pub use error::{DataError, DecodeError};

/// Load a JSON catalog file.
///
/// The file holds an array of programs:
/// `[{"id": "...", "name": "...", "domain": "...", "min_grades": {...}, "tags": [...]}]`.
///
/// # Errors
/// Returns [`DataError::Open`] when the file cannot be opened and
/// [`DataError::Decode`] when its contents are malformed or invalid.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, DataError> {
    let file = open_utf8_file(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = catalog_from_reader(BufReader::new(file)).map_err(|source| {
        DataError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("loaded {} programs from {path}", catalog.len());
    Ok(catalog)
}

/// Load a JSON profile file.
///
/// The file holds one object:
/// `{"name": "...", "grades": {...}, "interests": [...], "aspirations": [...]}`.
///
/// # Errors
/// Returns [`DataError::Open`] when the file cannot be opened and
/// [`DataError::Decode`] when its contents are malformed or invalid.
pub fn load_profile(path: &Utf8Path) -> Result<StudentProfile, DataError> {
    let file = open_utf8_file(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = profile_from_reader(BufReader::new(file)).map_err(|source| {
        DataError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("loaded profile for {} from {path}", profile.name());
    Ok(profile)
}

/// Decode a catalog from any JSON reader.
///
/// # Errors
/// Returns [`DecodeError`] for malformed JSON, invalid grades, blank subject
/// keys or catalog validation failures.
pub fn catalog_from_reader<R: Read>(reader: R) -> Result<Catalog, DecodeError> {
    let documents: Vec<ProgramDocument> =
        serde_json::from_reader(reader).map_err(DecodeError::Json)?;
    let programs = documents
        .into_iter()
        .map(ProgramDocument::into_program)
        .collect::<Result<Vec<_>, _>>()?;
    Catalog::new(programs).map_err(DecodeError::Catalog)
}

/// Decode a profile from any JSON reader.
///
/// # Errors
/// Returns [`DecodeError`] for malformed JSON, invalid grades or blank
/// subject keys.
pub fn profile_from_reader<R: Read>(reader: R) -> Result<StudentProfile, DecodeError> {
    let document: ProfileDocument = serde_json::from_reader(reader).map_err(DecodeError::Json)?;
    document.into_profile()
}

#[cfg(test)]
mod tests;
