#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the wordtally binary.
#[macro_export]
macro_rules! wordtally {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("wordtally"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a CSV with a `GroupName,Text` header and the given rows.
    pub fn create_csv(&self, relative_path: &str, rows: &[(&str, &str)]) -> PathBuf {
        let mut content = String::from("GroupName,Text\n");
        for (group, text) in rows {
            content.push_str(&quote(group));
            content.push(',');
            content.push_str(&quote(text));
            content.push('\n');
        }
        self.create_file(relative_path, &content)
    }

    /// Creates a `.wordtally.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".wordtally.toml", content)
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Names of all entries in the temp directory, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("Failed to read temp directory")
            .map(|e| e.expect("bad entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// The four-row sample used across scenarios.
pub const SAMPLE_ROWS: &[(&str, &str)] = &[
    ("A", "one two"),
    ("A", "three"),
    ("B", "four five six"),
    ("C", ""),
];
