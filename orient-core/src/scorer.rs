//! The boundary between ranking and fitness policy.
//!
//! Rankers only need a number per `(learner, program)` pair; how grades,
//! interests and aspirations are weighed lives behind [`Scorer`].

use crate::{Program, StudentProfile};

/// Fitness policy consulted once per catalog entry.
///
/// A score of `1.0` means the learner clears every requirement by a wide
/// margin and shares all of the program's keywords; `0.0` means no fit at all
/// or nothing to judge by. Sparse profiles are not an error: a missing grade
/// or an empty keyword set simply lowers the score.
///
/// Rankers compare scores with each other, so implementations should keep
/// them finite and inside `0.0..=1.0` and should depend on nothing but the
/// two inputs. [`Scorer::sanitise`] folds stray values back into that range.
/// The `Send + Sync` bound lets one scorer be shared by parallel ranking
/// passes.
///
/// # Examples
///
/// ```rust
/// use orient_core::{Program, Scorer, StudentProfile};
///
/// /// Full fit only when every program tag is one of the learner's interests.
/// struct TagOverlap;
///
/// impl Scorer for TagOverlap {
///     fn score(&self, profile: &StudentProfile, program: &Program) -> f32 {
///         let tags = program.tags();
///         let shared = tags.iter().filter(|tag| profile.has_interest(tag)).count();
///         if shared == tags.len() && shared > 0 { 1.0 } else { 0.0 }
///     }
/// }
///
/// let learner = StudentProfile::new("Alice").with_interest("finance");
/// let program = Program::new("eco", "Économie", "Business").with_tag("finance");
/// assert_eq!(TagOverlap.score(&learner, &program), 1.0);
/// assert_eq!(TagOverlap::sanitise(f32::NAN), 0.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Fitness of `program` for `profile`.
    fn score(&self, profile: &StudentProfile, program: &Program) -> f32;

    /// Fold a raw value into `0.0..=1.0`; NaN and infinities become `0.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, profile: &StudentProfile, program: &Program) -> f32 {
        (**self).score(profile, program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ConstantScorer;
    use rstest::rstest;

    #[rstest]
    #[case(0.25, 0.25)]
    #[case(1.5, 1.0)]
    #[case(-0.5, 0.0)]
    #[case(f32::NAN, 0.0)]
    #[case(f32::INFINITY, 0.0)]
    fn sanitise_folds_into_unit_range(#[case] raw: f32, #[case] expected: f32) {
        assert_eq!(ConstantScorer::sanitise(raw), expected);
    }

    #[rstest]
    fn borrowed_scorers_delegate() {
        let scorer = ConstantScorer(0.75);
        let borrowed: &dyn Scorer = &scorer;
        let profile = StudentProfile::new("Alice");
        let program = Program::new("eco", "Économie", "Business");

        assert_eq!((&borrowed).score(&profile, &program), 0.75);
    }
}
