//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working area for configuration files, templates, and export
/// output.
pub struct TestDir {
    #[allow(dead_code)] // Kept to prevent TempDir from being dropped
    dir: TempDir,
    pub root: PathBuf,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        // Canonicalize the path to resolve symlinks (e.g., /var -> /private/var on macOS)
        let root = dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        Self { dir, root }
    }

    /// Writes a file relative to the root, creating parent directories.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.root.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Asserts that HTML content contains the expected substring.
pub fn assert_html_contains(html: &str, expected: &str) {
    assert!(
        html.contains(expected),
        "Expected HTML to contain '{}', but it wasn't found.\nHTML content:\n{}",
        expected,
        html
    );
}

/// Asserts that HTML content does not contain the unexpected substring.
#[allow(dead_code)]
pub fn assert_html_not_contains(html: &str, unexpected: &str) {
    assert!(
        !html.contains(unexpected),
        "Expected HTML to NOT contain '{}', but it was found.\nHTML content:\n{}",
        unexpected,
        html
    );
}
