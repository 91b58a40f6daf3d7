//! Ordered program catalogs.
//!
//! Catalog order is meaningful: rankers break score ties by it.

use std::collections::HashSet;

use thiserror::Error;

use crate::Program;

/// An ordered collection of programs with unique identifiers.
///
/// # Examples
/// ```
/// use orient_core::{Catalog, Program};
///
/// # fn main() -> Result<(), orient_core::CatalogError> {
/// let catalog = Catalog::new([
///     Program::new("medecine", "Médecine", "Santé"),
///     Program::new("lettres", "Lettres", "Lettres"),
/// ])?;
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("lettres").map(Program::name), Some("Lettres"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    programs: Vec<Program>,
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two programs shared an identifier.
    #[error("program id '{id}' appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// A program had an empty or whitespace identifier.
    #[error("program at position {position} has an empty id")]
    EmptyId {
        /// Zero-based position in the input sequence.
        position: usize,
    },
}

impl Catalog {
    /// Validate and construct a catalog, preserving input order.
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyId`] for blank identifiers and
    /// [`CatalogError::DuplicateId`] for the first repeated identifier.
    pub fn new<I>(programs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Program>,
    {
        let programs: Vec<Program> = programs.into_iter().collect();
        let mut seen = HashSet::with_capacity(programs.len());
        for (position, program) in programs.iter().enumerate() {
            if program.id().trim().is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if !seen.insert(program.id()) {
                return Err(CatalogError::DuplicateId {
                    id: program.id().to_owned(),
                });
            }
        }
        Ok(Self { programs })
    }

    /// Construct an empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            programs: Vec::new(),
        }
    }

    /// Programs in catalog order.
    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Look a program up by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Program> {
        self.programs.iter().find(|program| program.id() == id)
    }

    /// Iterate over programs in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Program> {
        self.programs.iter()
    }

    /// Number of programs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Report whether the catalog holds no programs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl AsRef<[Program]> for Catalog {
    fn as_ref(&self) -> &[Program] {
        &self.programs
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Program;
    type IntoIter = std::slice::Iter<'a, Program>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
