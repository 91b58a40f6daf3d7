//! Property-based tests for the fitness scorer.
//!
//! # Invariants tested
//!
//! - **Range:** every score lies in `0.0..=1.0` and is finite.
//! - **Clamping:** a surplus of five points or more saturates a subject at
//!   `1.0`; a deficit of five or more floors it at `0.0`.
//! - **Purity:** scoring twice yields the same value.

use std::collections::BTreeMap;

use orient_core::{Program, Scorer, StudentProfile};
use orient_scorer::FitnessScorer;
use proptest::prelude::*;

const SUBJECTS: [&str; 6] = ["maths", "physique", "svt", "francais", "philo", "langues"];
const KEYWORDS: [&str; 8] = [
    "informatique",
    "santé",
    "finance",
    "langues",
    "ingénieur",
    "médecin",
    "biologie",
    "écriture",
];

fn grade_map() -> impl Strategy<Value = BTreeMap<&'static str, f32>> {
    prop::collection::btree_map(prop::sample::select(SUBJECTS.to_vec()), 0.0_f32..=20.0_f32, 0..=4)
}

fn keyword_set() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(KEYWORDS.to_vec(), 0..=KEYWORDS.len())
}

fn profile_strategy() -> impl Strategy<Value = StudentProfile> {
    (grade_map(), keyword_set(), keyword_set()).prop_map(|(grades, interests, aspirations)| {
        grades
            .into_iter()
            .fold(StudentProfile::new("Prop"), |profile, (subject, grade)| {
                profile.with_grade(subject, grade)
            })
            .with_interests(interests)
            .with_aspirations(aspirations)
    })
}

fn program_strategy() -> impl Strategy<Value = Program> {
    (grade_map(), keyword_set()).prop_map(|(requirements, tags)| {
        requirements
            .into_iter()
            .fold(Program::new("prop", "Prop", "Test"), |program, (subject, grade)| {
                program.with_min_grade(subject, grade)
            })
            .with_tags(tags)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: scores are finite and never leave the unit interval.
    #[test]
    fn score_stays_in_unit_interval(
        profile in profile_strategy(),
        program in program_strategy(),
    ) {
        let score = FitnessScorer.score(&profile, &program);
        prop_assert!(score.is_finite());
        prop_assert!((0.0..=1.0).contains(&score), "score {score} out of range");
    }

    /// Property: components stay within range as well.
    #[test]
    fn components_stay_in_unit_interval(
        profile in profile_strategy(),
        program in program_strategy(),
    ) {
        let breakdown = FitnessScorer.breakdown(&profile, &program);
        for component in [breakdown.grade, breakdown.interest, breakdown.aspiration] {
            prop_assert!((0.0..=1.0).contains(&component));
        }
    }

    /// Property: a large surplus on a single requirement saturates the grade
    /// component at exactly one.
    #[test]
    fn surplus_of_five_saturates(required in 0.0_f32..=15.0_f32, surplus in 5.0_f32..=20.0_f32) {
        let student_grade = (required + surplus).min(20.0);
        prop_assume!(student_grade - required >= 5.0);
        let program = Program::new("p", "P", "D").with_min_grade("maths", required);
        let profile = StudentProfile::new("Prop").with_grade("maths", student_grade);

        prop_assert_eq!(FitnessScorer.breakdown(&profile, &program).grade, 1.0);
    }

    /// Property: a large deficit on a single requirement floors the grade
    /// component at exactly zero.
    #[test]
    fn deficit_of_five_floors(required in 5.0_f32..=20.0_f32, deficit in 5.0_f32..=20.0_f32) {
        let student_grade = (required - deficit).max(0.0);
        prop_assume!(student_grade - required <= -5.0);
        let program = Program::new("p", "P", "D").with_min_grade("maths", required);
        let profile = StudentProfile::new("Prop").with_grade("maths", student_grade);

        prop_assert_eq!(FitnessScorer.breakdown(&profile, &program).grade, 0.0);
    }

    /// Property: scoring is deterministic.
    #[test]
    fn scoring_is_repeatable(
        profile in profile_strategy(),
        program in program_strategy(),
    ) {
        let first = FitnessScorer.score(&profile, &program);
        let second = FitnessScorer.score(&profile, &program);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
