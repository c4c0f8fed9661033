//! Common test utilities for integration tests.
//!
//! This module provides a sandbox directory with helpers for building small
//! file trees and resolving paths inside them.

use std::fs;

use fspath::{FsPath, WorkingDir};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
///
/// The sandbox root is canonicalized so that comparisons against resolved
/// real paths hold on systems where the temp dir sits behind a symlink.
pub struct Sandbox {
    _temp: TempDir,
    root: FsPath,
}

#[allow(dead_code)]
impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let root = FsPath::from_std(&fs::canonicalize(temp.path()).unwrap());
        Self { _temp: temp, root }
    }

    /// The sandbox root.
    pub fn root(&self) -> &FsPath {
        &self.root
    }

    /// A path below the root; `rel` may hold several segments.
    pub fn path(&self, rel: &str) -> FsPath {
        self.root.join(rel)
    }

    /// A working-directory context at the root that leaves the process
    /// working directory alone.
    pub fn cwd(&self) -> WorkingDir {
        WorkingDir::detached(self.root.clone())
    }

    /// Writes `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> FsPath {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(&parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Creates the directory `rel` and its parents.
    pub fn mkdir(&self, rel: &str) -> FsPath {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }
}
