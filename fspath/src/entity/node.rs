//! The generic entity facade.

use std::fs;

use crate::entity::FsEntity;
use crate::error::{Error, Result};
use crate::path::FsPath;

/// Any entry that is neither a regular file nor a directory: fifos,
/// sockets, devices, dangling links and missing paths.
#[derive(Debug, Clone)]
pub struct Node {
    path: FsPath,
}

impl Node {
    /// A facade for whatever is at `path`.
    #[must_use]
    pub fn new(path: FsPath) -> Self {
        Self { path }
    }

    /// Remove the entry itself. A link is removed, not its target.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry cannot be removed.
    pub fn delete(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|e| Error::io(&self.path, e))?;
        log::debug!("deleted {}", self.path);
        Ok(())
    }
}

impl FsEntity for Node {
    fn path(&self) -> &FsPath {
        &self.path
    }

    fn set_path(&mut self, path: FsPath) {
        self.path = path;
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        super::same_entity(self, other)
    }
}
