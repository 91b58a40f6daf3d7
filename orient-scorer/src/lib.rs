//! Fitness scoring for Orient programs.
//!
//! [`FitnessScorer`] implements the [`Scorer`](orient_core::Scorer) trait by
//! blending three components, each in `0.0..=1.0`:
//!
//! - **Grades** (weight 0.60): for every subject a program states a minimum
//!   grade for, the learner's surplus or deficit is mapped onto
//!   `0.5 + diff / 10` and clamped, so a met requirement sits at `0.5`, a
//!   five point surplus saturates at `1.0` and a five point deficit at `0.0`.
//!   The component is the mean across required subjects. A subject missing
//!   from the profile counts as a grade of `0.0`; a program without
//!   requirements contributes `0.0`.
//! - **Interests** (weight 0.25): the fraction of the program's tags that the
//!   learner lists as interests.
//! - **Aspirations** (weight 0.15): `1.0` when any program tag is one of the
//!   learner's aspirations, otherwise `0.0`.
//!
//! Weights are fixed and sum to one, so the blended score stays in range.
//!
//! # Examples
//!
//! ```
//! use orient_core::{Program, StudentProfile};
//! use orient_scorer::FitnessScorer;
//!
//! let program = Program::new("ing_info", "Ingénieur Informatique", "Informatique")
//!     .with_min_grade("maths", 14.0)
//!     .with_min_grade("physique", 12.0)
//!     .with_min_grade("francais", 10.0)
//!     .with_tags(["informatique", "programmation", "algorithmes", "intelligence artificielle"]);
//! let student = StudentProfile::new("Alice")
//!     .with_grade("maths", 16.0)
//!     .with_grade("physique", 14.0)
//!     .with_grade("francais", 12.0)
//!     .with_interests(["informatique", "algorithmes"])
//!     .with_aspiration("ingénieur");
//!
//! let breakdown = FitnessScorer.breakdown(&student, &program);
//! assert!((breakdown.total - 0.545).abs() < 1e-6);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod components;
mod fitness;
mod weights;

pub use fitness::{FitnessScorer, ScoreBreakdown, score};
pub use weights::{ASPIRATION_WEIGHT, GRADE_WEIGHT, INTEREST_WEIGHT};
