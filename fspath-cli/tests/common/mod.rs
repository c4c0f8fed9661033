//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated working directory and home directory
//! - Command builders with configuration environment variables cleared
//! - Fixture helpers for files, directories and links

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CLEARED_ENV: &[&str] = &[
    "FSPATH_CONFIG",
    "FSPATH_MAX_SYMLINK_DEPTH",
    "FSPATH_EXPAND_VARIABLES",
    "FSPATH_DIR_MODE",
    "FSPATH_LOG_MODE",
];

/// Test environment with an isolated working and home directory.
///
/// Commands run with the temporary directory as both their working
/// directory and `HOME`, so no user configuration is picked up.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self { temp_dir, root }
    }

    /// A command running in the test directory with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fspath").expect("Failed to find fspath binary");
        cmd.current_dir(&self.root).env("HOME", &self.root);
        for name in CLEARED_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Run a command that must succeed and return its trimmed stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run fspath");

        assert!(
            output.status.success(),
            "fspath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Display form of a path under the test directory.
    pub fn display(&self, rel: &str) -> String {
        self.path(rel).to_string_lossy().into_owned()
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    #[cfg(unix)]
    pub fn symlink(&self, rel: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.path(rel);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
