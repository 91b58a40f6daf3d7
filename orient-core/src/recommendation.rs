//! Ranked output handed from rankers to presentation code.

use crate::Program;

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_TOP_K: usize = 3;

/// A program paired with the score it received.
///
/// The program is borrowed from the catalog that was ranked; no program data
/// is copied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recommendation<'a> {
    /// Recommended program.
    pub program: &'a Program,
    /// Fitness score in `0.0..=1.0`.
    pub score: f32,
}

impl<'a> Recommendation<'a> {
    /// Pair a program with its score.
    #[must_use]
    pub const fn new(program: &'a Program, score: f32) -> Self {
        Self { program, score }
    }
}
