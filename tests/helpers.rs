//! Shared test utilities for extscan tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Package-marker file used by the test trees.
pub const MARKER: &str = "__init__.py";

/// Test environment with a temporary source tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Source root the discoverer scans
    pub root: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with an empty source root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("src");
        fs::create_dir_all(&root).expect("Failed to create source root");

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Create a package directory (marker included) holding the given files.
    pub fn add_package(&self, rel: &str, files: &[&str]) {
        let dir = self.root.join(rel);
        fs::create_dir_all(&dir).expect("Failed to create package dir");
        fs::write(dir.join(MARKER), "").expect("Failed to write package marker");
        for file in files {
            fs::write(dir.join(file), "").expect("Failed to write source file");
        }
    }

    /// Create a plain directory without a package marker.
    pub fn add_plain_dir(&self, rel: &str) {
        fs::create_dir_all(self.root.join(rel)).expect("Failed to create dir");
    }

    /// Write a blacklist file outside the source root; returns its path.
    pub fn write_blacklist(&self, content: &str) -> PathBuf {
        let path = self._temp_dir.path().join("blacklist.txt");
        fs::write(&path, content).expect("Failed to write blacklist file");
        path
    }
}
