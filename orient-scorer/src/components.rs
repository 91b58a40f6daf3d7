//! The three scoring components.
#![forbid(unsafe_code)]

use orient_core::{Program, StudentProfile};

use crate::weights::{GRADE_MIDPOINT, GRADE_SPAN};

/// Mean normalised grade gap across the program's required subjects.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the grade component is an arithmetic mean over a small subject count"
)]
pub(crate) fn grade_component(profile: &StudentProfile, program: &Program) -> f32 {
    let requirements = program.min_grades();
    let count = requirements.len();
    if count == 0 {
        return 0.0_f32;
    }
    let total: f32 = requirements
        .map(|(subject, required)| normalise_gap(profile.grade_or_zero(subject) - required))
        .sum();
    total / count as f32
}

/// Map a grade surplus or deficit onto `0.0..=1.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation shifts and scales the grade gap"
)]
pub(crate) fn normalise_gap(diff: f32) -> f32 {
    (GRADE_MIDPOINT + diff / GRADE_SPAN).clamp(0.0_f32, 1.0_f32)
}

/// Fraction of the program's tags found among the learner's interests.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the interest component is a ratio of small tag counts"
)]
pub(crate) fn interest_component(profile: &StudentProfile, program: &Program) -> f32 {
    let tags = program.tags();
    if tags.is_empty() {
        return 0.0_f32;
    }
    let common = tags.iter().filter(|tag| profile.has_interest(tag)).count();
    common as f32 / tags.len() as f32
}

/// Full credit when any program tag is one of the learner's aspirations.
pub(crate) fn aspiration_component(profile: &StudentProfile, program: &Program) -> f32 {
    if program.tags().iter().any(|tag| profile.has_aspiration(tag)) {
        1.0_f32
    } else {
        0.0_f32
    }
}
