//! Text and JSON presentation of command results.

use std::io::Write;

use clap::ValueEnum;
use orient_core::{Catalog, Recommendation, StudentProfile};
use orient_data::ProgramDocument;
use orient_scorer::ScoreBreakdown;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Output encoding shared by every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

#[derive(Debug, Serialize)]
struct RecommendationReport<'a> {
    student: &'a str,
    recommendations: Vec<RecommendationEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct RecommendationEntry<'a> {
    id: &'a str,
    name: &'a str,
    domain: &'a str,
    score: f32,
    tags: &'a [String],
}

#[derive(Debug, Serialize)]
struct ExplanationReport<'a> {
    student: &'a str,
    programs: Vec<ExplanationEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ExplanationEntry<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(flatten)]
    breakdown: ScoreBreakdown,
}

pub(crate) fn write_recommendations(
    writer: &mut dyn Write,
    format: OutputFormat,
    profile: &StudentProfile,
    recommendations: &[Recommendation<'_>],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_recommendations_text(writer, profile, recommendations),
        OutputFormat::Json => write_json(
            writer,
            &RecommendationReport {
                student: profile.name(),
                recommendations: recommendations
                    .iter()
                    .map(|entry| RecommendationEntry {
                        id: entry.program.id(),
                        name: entry.program.name(),
                        domain: entry.program.domain(),
                        score: entry.score,
                        tags: entry.program.tags(),
                    })
                    .collect(),
            },
        ),
    }
}

fn write_recommendations_text(
    writer: &mut dyn Write,
    profile: &StudentProfile,
    recommendations: &[Recommendation<'_>],
) -> Result<(), CliError> {
    if recommendations.is_empty() {
        return writeln!(writer, "No programs to recommend for {}.", profile.name())
            .map_err(CliError::WriteOutput);
    }
    writeln!(writer, "Top recommendations for {}:", profile.name())
        .map_err(CliError::WriteOutput)?;
    for entry in recommendations {
        let program = entry.program;
        writeln!(
            writer,
            "\n- {} ({})\n  Fitness score: {:.2}\n  Tags: {}",
            program.name(),
            program.domain(),
            entry.score,
            program.tags().join(", ")
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

pub(crate) fn write_catalog(
    writer: &mut dyn Write,
    format: OutputFormat,
    catalog: &Catalog,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for program in catalog {
                writeln!(
                    writer,
                    "{}: {} ({})\n  Tags: {}",
                    program.id(),
                    program.name(),
                    program.domain(),
                    program.tags().join(", ")
                )
                .map_err(CliError::WriteOutput)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let documents: Vec<ProgramDocument> =
                catalog.iter().map(ProgramDocument::from).collect();
            write_json(writer, &documents)
        }
    }
}

pub(crate) fn write_explanation(
    writer: &mut dyn Write,
    format: OutputFormat,
    profile: &StudentProfile,
    catalog: &Catalog,
    breakdowns: &[ScoreBreakdown],
) -> Result<(), CliError> {
    let entries = catalog
        .iter()
        .zip(breakdowns)
        .map(|(program, breakdown)| ExplanationEntry {
            id: program.id(),
            name: program.name(),
            breakdown: *breakdown,
        });
    match format {
        OutputFormat::Text => {
            writeln!(writer, "Score breakdown for {}:", profile.name())
                .map_err(CliError::WriteOutput)?;
            for entry in entries {
                let parts = entry.breakdown;
                writeln!(
                    writer,
                    "\n- {} ({})\n  Total: {:.2}\n  Grades: {:.2}  Interests: {:.2}  Aspirations: {:.2}",
                    entry.name, entry.id, parts.total, parts.grade, parts.interest, parts.aspiration
                )
                .map_err(CliError::WriteOutput)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(
            writer,
            &ExplanationReport {
                student: profile.name(),
                programs: entries.collect(),
            },
        ),
    }
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
