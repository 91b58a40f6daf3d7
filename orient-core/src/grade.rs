//! Grades on the 0 to 20 scale.
//!
//! Profiles and programs store plain `f32` values; [`Grade`] is the validated
//! entry point used when grades arrive from user input or files.

use std::str::FromStr;

use thiserror::Error;

/// Lowest representable grade.
pub const MIN_GRADE: f32 = 0.0;
/// Highest representable grade.
pub const MAX_GRADE: f32 = 20.0;

/// A grade within `MIN_GRADE..=MAX_GRADE`.
///
/// # Examples
/// ```
/// use orient_core::Grade;
///
/// let grade: Grade = "14,5".parse().expect("comma decimals are accepted");
/// assert_eq!(grade.value(), 14.5);
/// assert!(Grade::new(21.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Grade(f32);

/// Errors returned when validating a [`Grade`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GradeError {
    /// The value was NaN or infinite.
    #[error("grade must be a finite number")]
    NotFinite,
    /// The value fell outside the grading scale.
    #[error("grade {value} is outside the range {MIN_GRADE}..={MAX_GRADE}")]
    OutOfRange {
        /// Rejected value.
        value: f32,
    },
    /// The input text was not a number.
    #[error("'{input}' is not a number")]
    Parse {
        /// Raw text supplied by the caller.
        input: String,
    },
}

impl Grade {
    /// Validate and wrap a grade.
    ///
    /// # Errors
    /// Returns [`GradeError::NotFinite`] for NaN or infinite values and
    /// [`GradeError::OutOfRange`] for values outside `0.0..=20.0`.
    pub fn new(value: f32) -> Result<Self, GradeError> {
        if !value.is_finite() {
            return Err(GradeError::NotFinite);
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(GradeError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Coerce any value onto the scale.
    ///
    /// Non-finite values become [`MIN_GRADE`]; everything else is clamped.
    ///
    /// # Examples
    /// ```
    /// use orient_core::Grade;
    ///
    /// assert_eq!(Grade::saturating(25.0).value(), 20.0);
    /// assert_eq!(Grade::saturating(f32::NAN).value(), 0.0);
    /// ```
    #[must_use]
    pub fn saturating(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_GRADE, MAX_GRADE))
        } else {
            Self(MIN_GRADE)
        }
    }

    /// Return the raw value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    /// Parse a grade, accepting either `.` or `,` as the decimal separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f32 = trimmed
            .replace(',', ".")
            .parse()
            .map_err(|_| GradeError::Parse {
                input: trimmed.to_owned(),
            })?;
        Self::new(value)
    }
}

impl From<Grade> for f32 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}
