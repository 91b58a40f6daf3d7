//! Ranked program recommendations for Orient.
//!
//! This crate provides [`Recommender`], which runs a
//! [`Scorer`](orient_core::Scorer) over every program in a catalog and
//! returns the best matches. Ranking is a stable descending sort, so programs
//! with equal scores keep their catalog order; the result is then truncated
//! to the requested size.
//!
//! The recommender borrows the catalog and hands back
//! [`Recommendation`](orient_core::Recommendation) values that point into it.
//!
//! # Examples
//!
//! ```
//! use orient_core::{Program, StudentProfile};
//! use orient_recommender::Recommender;
//! use orient_scorer::FitnessScorer;
//!
//! let catalog = vec![
//!     Program::new("lettres", "Lettres", "Lettres").with_tag("littérature"),
//!     Program::new("eco_gestion", "Économie & Gestion", "Business").with_tag("finance"),
//! ];
//! let student = StudentProfile::new("Ines").with_interest("finance");
//!
//! let ranked = Recommender::new(FitnessScorer).recommend(&student, &catalog, 1);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].program.id(), "eco_gestion");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod recommender;

pub use recommender::{Recommender, recommend};
