//! Interactive collection of a learner profile.

use std::io::{BufRead, Write};

use orient_core::{Grade, MAX_GRADE, MIN_GRADE, StudentProfile, parse_keyword_list};
use orient_data::SUBJECTS;

use crate::CliError;

const NAME_PROMPT: &str = "learner name";
const INTERESTS_PROMPT: &str = "interests";
const ASPIRATIONS_PROMPT: &str = "aspirations";

/// Question-and-answer session over any line reader and writer.
///
/// Grades are asked per subject in [`SUBJECTS`] order. An empty answer skips
/// the subject; an unparsable or off-scale answer is reported and asked
/// again.
pub(crate) struct Interview<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interview<R, W> {
    pub(crate) const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn run(mut self) -> Result<StudentProfile, CliError> {
        self.say("=== Learner profile ===")?;
        let name = self.ask("Learner name: ", NAME_PROMPT)?;
        let mut profile = StudentProfile::new(name);

        self.say(&format!(
            "Enter grades from {MIN_GRADE} to {MAX_GRADE}. Leave blank when there is no grade:"
        ))?;
        for subject in SUBJECTS {
            if let Some(grade) = self.ask_grade(subject)? {
                profile = profile.with_grade(subject, grade.value());
            }
        }

        let interests = self.ask(
            "Interests, comma separated (informatique, biologie, économie...): ",
            INTERESTS_PROMPT,
        )?;
        let aspirations = self.ask(
            "Target careers or fields, comma separated (ingénieur, médecin...): ",
            ASPIRATIONS_PROMPT,
        )?;
        log::debug!("interview completed for {}", profile.name());
        Ok(profile
            .with_interests(parse_keyword_list(&interests))
            .with_aspirations(parse_keyword_list(&aspirations)))
    }

    fn ask_grade(&mut self, subject: &'static str) -> Result<Option<Grade>, CliError> {
        loop {
            let answer = self.ask(&format!("- {subject}: "), subject)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<Grade>() {
                Ok(grade) => return Ok(Some(grade)),
                Err(err) => self.say(&format!("{err}; please try again."))?,
            }
        }
    }

    /// Write `question` and read one trimmed line.
    fn ask(&mut self, question: &str, prompt: &'static str) -> Result<String, CliError> {
        self.output
            .write_all(question.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(CliError::Prompt)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(CliError::Prompt)?;
        if read == 0 {
            return Err(CliError::PromptClosed { prompt });
        }
        Ok(line.trim().to_owned())
    }

    fn say(&mut self, message: &str) -> Result<(), CliError> {
        writeln!(self.output, "{message}").map_err(CliError::Prompt)
    }
}
