#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the consistency-guard binary.
#[macro_export]
macro_rules! consistency_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("consistency-guard"))
    };
}

/// Creates a temporary project tree for integration tests.
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
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the temp directory as a CLI argument.
    pub fn arg(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Creates a `.consistency.toml` in the project root.
    pub fn create_standards(&self, content: &str) {
        self.create_file(".consistency.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Populates a project that satisfies the built-in standards.
    pub fn create_conforming_project(&self) {
        self.create_file("README.md", CONFORMING_README);
        self.create_file("package.json", CONFORMING_PACKAGE_JSON);
        self.create_file("src/index.js", "const greeting = 'hello';\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const CONFORMING_README: &str = "# demo\n\n## Installation\n\nnpm install\n\n## Usage\n\nnpm start\n\n## License\n\nMIT\n";

pub const CONFORMING_PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "version": "1.0.0"
}
"#;
