//! Test-only scorers and fixtures used by unit, property and behaviour tests.

use std::collections::HashMap;

use crate::{Program, Scorer, StudentProfile};

/// `Scorer` returning the same value for every program.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConstantScorer(pub f32);

impl Scorer for ConstantScorer {
    fn score(&self, _profile: &StudentProfile, _program: &Program) -> f32 {
        <Self as Scorer>::sanitise(self.0)
    }
}

/// `Scorer` looking scores up by program identifier.
///
/// Programs missing from the table score `0.0`.
#[derive(Debug, Clone, Default)]
pub struct TableScorer {
    scores: HashMap<String, f32>,
}

impl TableScorer {
    /// Build a table from `(program id, score)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        Self {
            scores: pairs
                .into_iter()
                .map(|(id, score)| (id.into(), score))
                .collect(),
        }
    }
}

impl Scorer for TableScorer {
    fn score(&self, _profile: &StudentProfile, program: &Program) -> f32 {
        <Self as Scorer>::sanitise(self.scores.get(program.id()).copied().unwrap_or(0.0))
    }
}

/// The computer engineering program used in worked scoring examples.
#[must_use]
pub fn engineering_program() -> Program {
    Program::new(
        "ing_info",
        "Cycle Prépa + Ingénieur Informatique",
        "Informatique",
    )
    .with_min_grade("maths", 14.0)
    .with_min_grade("physique", 12.0)
    .with_min_grade("francais", 10.0)
    .with_tags([
        "informatique",
        "programmation",
        "algorithmes",
        "intelligence artificielle",
    ])
}

/// A learner two points above every engineering requirement.
#[must_use]
pub fn engineering_student() -> StudentProfile {
    StudentProfile::new("Alice")
        .with_grade("maths", 16.0)
        .with_grade("physique", 14.0)
        .with_grade("francais", 12.0)
        .with_interests(["informatique", "algorithmes"])
        .with_aspiration("ingénieur")
}

/// Build `count` untagged programs with identifiers `p0`, `p1`, ...
#[must_use]
pub fn numbered_programs(count: usize) -> Vec<Program> {
    (0..count)
        .map(|index| Program::new(format!("p{index}"), format!("Program {index}"), "Test"))
        .collect()
}
