//! Unit coverage for catalog and profile decoding.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use orient_core::{CatalogError, GradeError, Program};
use rstest::rstest;
use tempfile::TempDir;

use crate::{
    DataError, DecodeError, ProgramDocument, builtin_catalog, catalog_from_reader, load_catalog,
    load_profile, profile_from_reader,
};

#[rstest]
fn builtin_catalog_is_valid() {
    let catalog = builtin_catalog().expect("builtin catalog");
    let ids: Vec<&str> = catalog.iter().map(Program::id).collect();
    assert_eq!(ids, ["ing_info", "medecine", "eco_gestion", "lettres"]);
}

#[rstest]
fn decodes_catalog_and_normalises_keywords() {
    let json = r#"[
        {"id": "eco", "name": "Eco", "domain": "Business",
         "min_grades": {" Maths ": 11},
         "tags": ["Finance", "  ", "finance", "Management"]}
    ]"#;

    let catalog = catalog_from_reader(json.as_bytes()).expect("decode catalog");
    let program = catalog.get("eco").expect("program present");

    assert_eq!(program.min_grade("maths"), Some(11.0));
    assert_eq!(program.tags(), ["finance", "management"]);
}

#[rstest]
fn optional_fields_default_to_empty() {
    let json = r#"[{"id": "bare", "name": "Bare", "domain": "None"}]"#;

    let catalog = catalog_from_reader(json.as_bytes()).expect("decode catalog");
    let program = catalog.get("bare").expect("program present");

    assert_eq!(program.min_grades().len(), 0);
    assert!(program.tags().is_empty());
}

#[rstest]
fn rejects_duplicate_program_ids() {
    let json = r#"[
        {"id": "a", "name": "A", "domain": "D"},
        {"id": "a", "name": "A again", "domain": "D"}
    ]"#;

    let err = catalog_from_reader(json.as_bytes()).expect_err("duplicate ids");
    assert!(matches!(
        err,
        DecodeError::Catalog(CatalogError::DuplicateId { ref id }) if id == "a"
    ));
}

#[rstest]
#[case(r#"{"name": "Ada", "grades": {"maths": 21}}"#)]
#[case(r#"{"name": "Ada", "grades": {"maths": -1}}"#)]
fn rejects_grades_off_the_scale(#[case] json: &str) {
    let err = profile_from_reader(json.as_bytes()).expect_err("invalid grade");
    match err {
        DecodeError::InvalidGrade {
            owner,
            subject,
            source: GradeError::OutOfRange { .. },
        } => {
            assert_eq!(owner, "Ada");
            assert_eq!(subject, "maths");
        }
        other => panic!("expected InvalidGrade, found {other:?}"),
    }
}

#[rstest]
fn rejects_blank_subjects() {
    let json = r#"{"name": "Ada", "grades": {"  ": 12}}"#;

    let err = profile_from_reader(json.as_bytes()).expect_err("blank subject");
    assert!(matches!(err, DecodeError::BlankSubject { ref owner } if owner == "Ada"));
}

#[rstest]
fn rejects_unknown_fields() {
    let json = r#"{"name": "Ada", "hobbies": ["chess"]}"#;

    let err = profile_from_reader(json.as_bytes()).expect_err("unknown field");
    assert!(matches!(err, DecodeError::Json(_)));
}

#[rstest]
fn decodes_profile() {
    let json = r#"{
        "name": " Ada ",
        "grades": {"maths": 16, "Physique": 14.5},
        "interests": ["Informatique", "algorithmes"],
        "aspirations": ["Ingénieur"]
    }"#;

    let profile = profile_from_reader(json.as_bytes()).expect("decode profile");

    assert_eq!(profile.name(), "Ada");
    assert_eq!(profile.grade("physique"), Some(14.5));
    assert!(profile.has_interest("informatique"));
    assert!(profile.has_aspiration("ingénieur"));
}

#[rstest]
fn program_documents_round_trip_through_core() {
    let catalog = builtin_catalog().expect("builtin catalog");
    let documents: Vec<ProgramDocument> = catalog.iter().map(ProgramDocument::from).collect();
    let json = serde_json::to_string(&documents).expect("serialise documents");

    let reloaded = catalog_from_reader(json.as_bytes()).expect("reload catalog");
    assert_eq!(reloaded, catalog);
}

#[rstest]
fn load_errors_carry_the_path() {
    let temp = TempDir::new().expect("tempdir");
    let path = Utf8PathBuf::from_path_buf(temp.path().join("missing.json")).expect("utf8 path");

    let err = load_catalog(&path).expect_err("missing file");
    assert!(matches!(err, DataError::Open { path: ref reported, .. } if reported == &path));
}

#[rstest]
fn decode_errors_carry_the_path() {
    let temp = TempDir::new().expect("tempdir");
    let path = Utf8PathBuf::from_path_buf(temp.path().join("profile.json")).expect("utf8 path");
    std::fs::write(path.as_std_path(), b"not json").expect("write profile");

    let err = load_profile(&path).expect_err("malformed file");
    assert!(matches!(err, DataError::Decode { path: ref reported, .. } if reported == &path));
}
