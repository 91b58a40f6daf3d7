//! Serialised shapes of catalog and profile files.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use orient_core::{Program, StudentProfile, normalise_keyword};
use serde::{Deserialize, Serialize};

use crate::DecodeError;

/// One program as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramDocument {
    /// Identifier, unique within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display domain.
    pub domain: String,
    /// Minimum grade per subject.
    #[serde(default)]
    pub min_grades: BTreeMap<String, f32>,
    /// Descriptive keywords.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A learner profile as written in a profile file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDocument {
    /// Display name.
    pub name: String,
    /// Grade per subject.
    #[serde(default)]
    pub grades: BTreeMap<String, f32>,
    /// Interest keywords.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Aspiration keywords.
    #[serde(default)]
    pub aspirations: Vec<String>,
}

impl ProgramDocument {
    /// Validate the document and build a [`Program`].
    ///
    /// Subjects and tags are normalised; blank tags are dropped.
    ///
    /// # Errors
    /// Returns [`DecodeError::BlankSubject`] or [`DecodeError::InvalidGrade`]
    /// when a minimum grade entry is unusable.
    pub fn into_program(self) -> Result<Program, DecodeError> {
        let Self {
            id,
            name,
            domain,
            min_grades,
            tags,
        } = self;
        let owner = id.trim().to_owned();
        let mut program = Program::new(owner.clone(), name, domain);
        for (raw_subject, grade) in min_grades {
            let subject = subject_key(&owner, &raw_subject)?;
            program = program
                .try_with_min_grade(subject, grade)
                .map_err(|source| DecodeError::InvalidGrade {
                    owner: owner.clone(),
                    subject: raw_subject,
                    source,
                })?;
        }
        Ok(program.with_tags(normalised(&owner, &tags)))
    }
}

impl ProfileDocument {
    /// Validate the document and build a [`StudentProfile`].
    ///
    /// Subjects, interests and aspirations are normalised; blank keywords are
    /// dropped.
    ///
    /// # Errors
    /// Returns [`DecodeError::BlankSubject`] or [`DecodeError::InvalidGrade`]
    /// when a grade entry is unusable.
    pub fn into_profile(self) -> Result<StudentProfile, DecodeError> {
        let Self {
            name,
            grades,
            interests,
            aspirations,
        } = self;
        let owner = name.trim().to_owned();
        let mut profile = StudentProfile::new(owner.clone());
        for (raw_subject, grade) in grades {
            let subject = subject_key(&owner, &raw_subject)?;
            profile = profile
                .try_with_grade(subject, grade)
                .map_err(|source| DecodeError::InvalidGrade {
                    owner: owner.clone(),
                    subject: raw_subject,
                    source,
                })?;
        }
        Ok(profile
            .with_interests(normalised(&owner, &interests))
            .with_aspirations(normalised(&owner, &aspirations)))
    }
}

impl From<&Program> for ProgramDocument {
    fn from(program: &Program) -> Self {
        Self {
            id: program.id().to_owned(),
            name: program.name().to_owned(),
            domain: program.domain().to_owned(),
            min_grades: program
                .min_grades()
                .map(|(subject, grade)| (subject.to_owned(), grade))
                .collect(),
            tags: program.tags().to_vec(),
        }
    }
}

fn subject_key(owner: &str, raw: &str) -> Result<String, DecodeError> {
    normalise_keyword(raw).ok_or_else(|| DecodeError::BlankSubject {
        owner: owner.to_owned(),
    })
}

fn normalised(owner: &str, keywords: &[String]) -> Vec<String> {
    let total = keywords.len();
    let kept: Vec<String> = keywords
        .iter()
        .filter_map(|keyword| normalise_keyword(keyword))
        .collect();
    if kept.len() < total {
        log::debug!(
            "dropped {} blank keywords for '{owner}'",
            total - kept.len()
        );
    }
    kept
}
