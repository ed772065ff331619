//! Test helpers for writing facility exports to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A warehouse export with one facility per supported city shape.
pub(super) const EXPORT: &str = r#"{
    "result": {
        "data_array": [
            ["Korle Bu Teaching", "Accra", "120", "Emergency Surgery", "X-Ray, MRI", "40"],
            ["Tamale Central", "Tamale", "15", "General Medicine", "Beds", "6"],
            ["Ho Diagnostics", "Ho", "8", "Radiology", "Portable X-Ray Unit", "2"],
            ["Nkawkaw Clinic", "Nkawkaw", null, null, null, null]
        ]
    }
}"#;

/// Temporary directory holding a dataset export.
pub(super) struct ExportDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ExportDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write export");
        path
    }
}

/// Parse captured command output as JSON.
pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("command output should be JSON")
}
