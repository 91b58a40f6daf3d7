//! Input resolution shared by the subcommands.

use camino::Utf8Path;
use orient_core::Catalog;

use crate::CliError;

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match orient_fs::file_is_file(path) {
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

/// Load the catalog at `path`, or the built-in one when no path is set.
pub(crate) fn load_catalog_or_builtin(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    match path {
        Some(path) => Ok(orient_data::load_catalog(path)?),
        None => {
            log::debug!("using the built-in catalog");
            orient_data::builtin_catalog().map_err(CliError::BuiltinCatalog)
        }
    }
}
