//! The directory facade.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::DEFAULT_DIR_MODE;
use crate::entity::{ensure_vacant, mode, Entity, File, FsEntity};
use crate::error::{Error, Result};
use crate::path::{link, FsPath};

/// A directory at a path. The directory need not exist yet.
#[derive(Debug, Clone)]
pub struct Dir {
    path: FsPath,
}

impl Dir {
    /// A facade for the directory at `path`.
    #[must_use]
    pub fn new(path: FsPath) -> Self {
        Self { path }
    }

    /// Create the directory with mode `0o755`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory exists or cannot be created.
    pub fn create(&self) -> Result<()> {
        self.create_with_mode(DEFAULT_DIR_MODE)
    }

    /// Create the directory and set its permission bits to `mode`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory exists, cannot be created, or
    /// refuses the permission change.
    pub fn create_with_mode(&self, mode: u32) -> Result<()> {
        fs::create_dir(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let current = self.metadata()?.permissions();
        fs::set_permissions(&self.path, mode::permissions_from_bits(current, mode))
            .map_err(|e| Error::io(&self.path, e))?;
        log::debug!("created directory {} (mode {mode:o})", self.path);
        Ok(())
    }

    /// Remove the directory and everything below it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if anything cannot be removed.
    pub fn delete(&self) -> Result<()> {
        fs::remove_dir_all(&self.path).map_err(|e| Error::io(&self.path, e))?;
        log::debug!("deleted directory {}", self.path);
        Ok(())
    }

    /// Recursively copy the tree to `dest`, which must not exist yet.
    ///
    /// Symbolic links inside the tree are recreated as links, not followed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `dest` exists or any entry fails to copy.
    pub fn copy(&self, dest: &FsPath) -> Result<Self> {
        ensure_vacant(dest)?;
        let source: &Path = self.path.as_ref();
        let target: &Path = dest.as_ref();

        let mut dir_permissions = Vec::new();
        for entry in WalkDir::new(source).follow_links(false) {
            let entry = entry.map_err(|e| Error::io(source, e.into()))?;
            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|_| Error::InvalidPath {
                    path: entry.path().to_path_buf(),
                    reason: format!("not below {}", source.display()),
                })?;
            let to = target.join(relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                fs::create_dir(&to).map_err(|e| Error::io(&to, e))?;
                let permissions = entry
                    .metadata()
                    .map_err(|e| Error::io(entry.path(), e.into()))?
                    .permissions();
                dir_permissions.push((to, permissions));
            } else if file_type.is_symlink() {
                let stored = fs::read_link(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
                link::symlink(&to, &stored)?;
            } else {
                fs::copy(entry.path(), &to).map_err(|e| Error::io(entry.path(), e))?;
            }
        }

        // Deepest first, once nothing more is written into them.
        for (to, permissions) in dir_permissions.into_iter().rev() {
            fs::set_permissions(&to, permissions).map_err(|e| Error::io(&to, e))?;
        }

        log::debug!("copied tree {} to {dest}", self.path);
        Ok(Self::new(dest.clone()))
    }

    /// Direct children as typed entities, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be read.
    pub fn entries(&self) -> Result<Vec<Entity>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(|e| Error::io(&self.path, e))? {
            let entry = entry.map_err(|e| Error::io(&self.path, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(names
            .iter()
            .map(|name| Entity::from_path(self.path.child(name)))
            .collect())
    }

    /// Direct children that are files.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be read.
    pub fn files(&self) -> Result<Vec<File>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter_map(|entity| match entity {
                Entity::File(file) => Some(file),
                _ => None,
            })
            .collect())
    }

    /// Direct children that are directories.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be read.
    pub fn dirs(&self) -> Result<Vec<Self>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter_map(|entity| match entity {
                Entity::Dir(dir) => Some(dir),
                _ => None,
            })
            .collect())
    }
}

impl FsEntity for Dir {
    fn path(&self) -> &FsPath {
        &self.path
    }

    fn set_path(&mut self, path: FsPath) {
        self.path = path;
    }
}

impl PartialEq for Dir {
    fn eq(&self, other: &Self) -> bool {
        super::same_entity(self, other)
    }
}
