//! The weighted fitness scorer.
#![forbid(unsafe_code)]

use orient_core::{Program, Scorer, StudentProfile};
use serde::Serialize;

use crate::components::{aspiration_component, grade_component, interest_component};
use crate::weights::{ASPIRATION_WEIGHT, GRADE_WEIGHT, INTEREST_WEIGHT};

/// Scorer blending grade, interest and aspiration components with fixed
/// weights.
///
/// The scorer is stateless; every call is a pure function of its inputs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FitnessScorer;

/// Individual components behind a fitness score.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Mean normalised grade gap, `0.0..=1.0`.
    pub grade: f32,
    /// Fraction of program tags matching the learner's interests.
    pub interest: f32,
    /// `1.0` when a program tag matches an aspiration, else `0.0`.
    pub aspiration: f32,
    /// Weighted blend of the three components.
    pub total: f32,
}

impl FitnessScorer {
    /// Compute every component alongside the blended total.
    #[must_use]
    pub fn breakdown(self, profile: &StudentProfile, program: &Program) -> ScoreBreakdown {
        let grade = grade_component(profile, program);
        let interest = interest_component(profile, program);
        let aspiration = aspiration_component(profile, program);
        ScoreBreakdown {
            grade,
            interest,
            aspiration,
            total: <Self as Scorer>::sanitise(blend(grade, interest, aspiration)),
        }
    }
}

impl Scorer for FitnessScorer {
    fn score(&self, profile: &StudentProfile, program: &Program) -> f32 {
        self.breakdown(profile, program).total
    }
}

/// Score `program` for `profile` with the default [`FitnessScorer`].
#[must_use]
pub fn score(profile: &StudentProfile, program: &Program) -> f32 {
    FitnessScorer.score(profile, program)
}

#[expect(
    clippy::float_arithmetic,
    reason = "the fitness score is a weighted sum of components"
)]
fn blend(grade: f32, interest: f32, aspiration: f32) -> f32 {
    GRADE_WEIGHT * grade + INTEREST_WEIGHT * interest + ASPIRATION_WEIGHT * aspiration
}
