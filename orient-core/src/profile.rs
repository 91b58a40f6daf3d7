//! Student profiles: grades, interests and aspirations for one learner.
//!
//! Profiles are built once with the chaining `with_*` methods and then only
//! read. Interests and aspirations are stored verbatim; normalise keywords
//! with [`normalise_keyword`](crate::normalise_keyword) before inserting them.

use std::collections::{BTreeMap, BTreeSet};

use crate::{Grade, GradeError};

/// A learner's grades and stated preferences.
///
/// # Examples
/// ```
/// use orient_core::StudentProfile;
///
/// let profile = StudentProfile::new("Alice")
///     .with_grade("maths", 16.0)
///     .with_interest("informatique")
///     .with_aspiration("ingénieur");
/// assert_eq!(profile.grade("maths"), Some(16.0));
/// assert!(profile.has_interest("informatique"));
/// assert!(profile.has_aspiration("ingénieur"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StudentProfile {
    name: String,
    grades: BTreeMap<String, f32>,
    interests: BTreeSet<String>,
    aspirations: BTreeSet<String>,
}

impl StudentProfile {
    /// Construct a profile with no grades, interests or aspirations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Display name of the learner.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the grade recorded for `subject`, if any.
    #[must_use]
    pub fn grade(&self, subject: &str) -> Option<f32> {
        self.grades.get(subject).copied()
    }

    /// Return the grade for `subject`, treating a missing grade as `0.0`.
    ///
    /// A missing grade is a penalty when scoring against a program that
    /// requires the subject, not an absence of information.
    ///
    /// # Examples
    /// ```
    /// use orient_core::StudentProfile;
    ///
    /// let profile = StudentProfile::new("Bob").with_grade("philo", 11.0);
    /// assert_eq!(profile.grade_or_zero("philo"), 11.0);
    /// assert_eq!(profile.grade_or_zero("svt"), 0.0);
    /// ```
    #[must_use]
    pub fn grade_or_zero(&self, subject: &str) -> f32 {
        self.grade(subject).unwrap_or(0.0)
    }

    /// Iterate over `(subject, grade)` pairs in subject order.
    pub fn grades(&self) -> impl Iterator<Item = (&str, f32)> {
        self.grades
            .iter()
            .map(|(subject, grade)| (subject.as_str(), *grade))
    }

    /// Keywords the learner finds engaging.
    #[must_use]
    pub const fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    /// Keywords describing careers or domains the learner targets.
    #[must_use]
    pub const fn aspirations(&self) -> &BTreeSet<String> {
        &self.aspirations
    }

    /// Report whether `keyword` is one of the learner's interests.
    #[must_use]
    pub fn has_interest(&self, keyword: &str) -> bool {
        self.interests.contains(keyword)
    }

    /// Report whether `keyword` is one of the learner's aspirations.
    #[must_use]
    pub fn has_aspiration(&self, keyword: &str) -> bool {
        self.aspirations.contains(keyword)
    }

    /// Record a grade, clamping it onto the `0..=20` scale.
    ///
    /// Non-finite values are recorded as `0.0`. Use
    /// [`try_with_grade`](Self::try_with_grade) to reject them instead.
    #[must_use]
    pub fn with_grade(mut self, subject: impl Into<String>, grade: f32) -> Self {
        self.grades
            .insert(subject.into(), Grade::saturating(grade).value());
        self
    }

    /// Record a grade after validating it.
    ///
    /// # Errors
    /// Returns [`GradeError`] when `grade` is not finite or off the scale.
    pub fn try_with_grade(
        mut self,
        subject: impl Into<String>,
        grade: f32,
    ) -> Result<Self, GradeError> {
        let validated = Grade::new(grade)?;
        self.grades.insert(subject.into(), validated.value());
        Ok(self)
    }

    /// Add an interest keyword.
    #[must_use]
    pub fn with_interest(mut self, keyword: impl Into<String>) -> Self {
        self.interests.insert(keyword.into());
        self
    }

    /// Add several interest keywords.
    #[must_use]
    pub fn with_interests<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Add an aspiration keyword.
    #[must_use]
    pub fn with_aspiration(mut self, keyword: impl Into<String>) -> Self {
        self.aspirations.insert(keyword.into());
        self
    }

    /// Add several aspiration keywords.
    #[must_use]
    pub fn with_aspirations<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aspirations.extend(keywords.into_iter().map(Into::into));
        self
    }
}
