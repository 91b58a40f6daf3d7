//! Programs: catalog entries a learner can be matched against.

use std::collections::BTreeMap;

use crate::{Grade, GradeError};

/// An academic or career program.
///
/// Minimum grades are reference points for scoring, not hard filters. Tags
/// keep the order in which they were first added and ignore repeats, so they
/// display in authoring order while behaving as a set.
///
/// # Examples
/// ```
/// use orient_core::Program;
///
/// let program = Program::new("lettres", "Lettres & Sciences Humaines", "Lettres")
///     .with_min_grade("francais", 14.0)
///     .with_tags(["littérature", "langues", "littérature"]);
/// assert_eq!(program.min_grade("francais"), Some(14.0));
/// assert_eq!(program.tags(), ["littérature", "langues"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Program {
    id: String,
    name: String,
    domain: String,
    min_grades: BTreeMap<String, f32>,
    tags: Vec<String>,
}

impl Program {
    /// Construct a program without grade requirements or tags.
    pub fn new(id: impl Into<String>, name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain: domain.into(),
            min_grades: BTreeMap::new(),
            tags: Vec::new(),
        }
    }

    /// Identifier, unique within a [`Catalog`](crate::Catalog).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display domain, e.g. `"Santé"`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Return the minimum grade stated for `subject`, if any.
    #[must_use]
    pub fn min_grade(&self, subject: &str) -> Option<f32> {
        self.min_grades.get(subject).copied()
    }

    /// Iterate over `(subject, required)` pairs in subject order.
    pub fn min_grades(&self) -> impl ExactSizeIterator<Item = (&str, f32)> {
        self.min_grades
            .iter()
            .map(|(subject, grade)| (subject.as_str(), *grade))
    }

    /// Descriptive keywords in authoring order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Report whether the program carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    /// State a minimum grade, clamping it onto the `0..=20` scale.
    #[must_use]
    pub fn with_min_grade(mut self, subject: impl Into<String>, grade: f32) -> Self {
        self.min_grades
            .insert(subject.into(), Grade::saturating(grade).value());
        self
    }

    /// State a minimum grade after validating it.
    ///
    /// # Errors
    /// Returns [`GradeError`] when `grade` is not finite or off the scale.
    pub fn try_with_min_grade(
        mut self,
        subject: impl Into<String>,
        grade: f32,
    ) -> Result<Self, GradeError> {
        let validated = Grade::new(grade)?;
        self.min_grades.insert(subject.into(), validated.value());
        Ok(self)
    }

    /// Add a tag unless it is already present.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.has_tag(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Add several tags, skipping repeats.
    #[must_use]
    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(self, Self::with_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_keep_first_seen_order() {
        let program = Program::new("p", "P", "D").with_tags(["b", "a", "b", "c"]);
        assert_eq!(program.tags(), ["b", "a", "c"]);
        assert!(program.has_tag("a"));
        assert!(!program.has_tag("A"));
    }

    #[test]
    fn min_grades_clamp_and_replace() {
        let program = Program::new("p", "P", "D")
            .with_min_grade("maths", 30.0)
            .with_min_grade("maths", 12.0)
            .with_min_grade("philo", -1.0);
        assert_eq!(
            program.min_grades().collect::<Vec<_>>(),
            vec![("maths", 12.0), ("philo", 0.0)]
        );
    }

    #[test]
    fn try_with_min_grade_rejects_nan() {
        let err = Program::new("p", "P", "D")
            .try_with_min_grade("maths", f32::NAN)
            .unwrap_err();
        assert_eq!(err, GradeError::NotFinite);
    }

    #[test]
    fn empty_program_has_no_requirements() {
        let program = Program::new("p", "P", "D");
        assert_eq!(program.min_grades().len(), 0);
        assert!(program.tags().is_empty());
    }
}
