//! Facade crate for the Orient study-program recommender.
//!
//! This crate re-exports the core domain types and exposes the fitness
//! scorer, ranking and catalog loading behind feature flags.
//!
//! ```
//! use orient_engine::{FitnessScorer, Program, Recommender, StudentProfile};
//!
//! let catalog = [
//!     Program::new("info", "Informatique", "Sciences")
//!         .with_min_grade("maths", 14.0)
//!         .with_tag("informatique"),
//!     Program::new("lettres", "Lettres", "Lettres").with_min_grade("francais", 14.0),
//! ];
//! let learner = StudentProfile::new("Alice")
//!     .with_grade("maths", 16.0)
//!     .with_interest("informatique");
//!
//! let ranked = Recommender::new(FitnessScorer).recommend(&learner, &catalog, 1);
//! assert_eq!(ranked[0].program.id(), "info");
//! ```

#![forbid(unsafe_code)]

pub use orient_core::{
    Catalog, CatalogError, DEFAULT_TOP_K, Grade, GradeError, MAX_GRADE, MIN_GRADE, Program,
    Recommendation, Scorer, StudentProfile, normalise_keyword, parse_keyword_list,
};

#[cfg(feature = "scorer")]
pub use orient_scorer::{FitnessScorer, ScoreBreakdown, score};

#[cfg(feature = "recommender")]
pub use orient_recommender::{Recommender, recommend};

#[cfg(feature = "data")]
pub use orient_data::{DataError, builtin_catalog, load_catalog, load_profile};
