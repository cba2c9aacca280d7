//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with a scratch directory
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file into the scratch directory and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// A `file://` descriptor for a freshly written data file
    pub fn data_file(&self, name: &str, content: &str) -> String {
        format!("--data=file://{}", self.write(name, content).display())
    }

    /// Create a command running in the scratch directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ptk").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("PTK_STRICT");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
