//! Test helpers for writing profile and catalog files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const ALICE_PROFILE: &str = r#"{
    "name": "Alice",
    "grades": {"maths": 16, "physique": 14, "francais": 12},
    "interests": ["informatique", "algorithmes"],
    "aspirations": ["ingénieur"]
}"#;

pub(super) const SMALL_CATALOG: &str = r#"[
    {"id": "lettres", "name": "Lettres", "domain": "Lettres",
     "min_grades": {"francais": 14}, "tags": ["littérature"]},
    {"id": "info", "name": "Informatique", "domain": "Sciences",
     "min_grades": {"maths": 14}, "tags": ["informatique"]}
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a profile and a catalog file.
pub(super) struct InputFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl InputFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_utf8(&root.join("alice.json"), ALICE_PROFILE.as_bytes());
        write_utf8(&root.join("catalog.json"), SMALL_CATALOG.as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn profile(&self) -> Utf8PathBuf {
        self.root.join("alice.json")
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }
}

pub(super) fn output_string(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("utf-8 output")
}
