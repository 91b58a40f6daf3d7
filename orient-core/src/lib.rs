//! Core domain types for the Orient engine.
//!
//! The crate models the two read-only inputs of a recommendation run, a
//! [`StudentProfile`] and a [`Catalog`] of [`Program`] entries, together with
//! the [`Scorer`] boundary that concrete scorers implement and the
//! [`Recommendation`] value that rankers hand back to presentation code.
//!
//! Constructors that can reject input return `Result` so validation happens at
//! the edges; scoring and ranking themselves are infallible.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod grade;
pub mod keyword;
pub mod profile;
pub mod program;
pub mod recommendation;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError};
pub use grade::{Grade, GradeError, MAX_GRADE, MIN_GRADE};
pub use keyword::{normalise_keyword, parse_keyword_list};
pub use profile::StudentProfile;
pub use program::Program;
pub use recommendation::{DEFAULT_TOP_K, Recommendation};
pub use scorer::Scorer;
