//! The regular-file facade.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::entity::{ensure_vacant, FsEntity};
use crate::error::{Error, Result};
use crate::path::FsPath;

/// Prefix for files created by [`File::temp`].
const TEMP_PREFIX: &str = "fspath-";

/// A regular file at a path. The file need not exist yet.
#[derive(Debug, Clone)]
pub struct File {
    path: FsPath,
}

impl File {
    /// A facade for the file at `path`.
    #[must_use]
    pub fn new(path: FsPath) -> Self {
        Self { path }
    }

    /// Create a new empty file with a unique name in the system temporary
    /// directory. The file is kept after the facade is dropped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created.
    pub fn temp() -> Result<Self> {
        Self::temp_in(&env::temp_dir())
    }

    /// Like [`File::temp`], inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created.
    pub fn temp_in(dir: &Path) -> Result<Self> {
        let named = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(dir)
            .map_err(|e| Error::io(dir, e))?;
        let (_, path) = named.keep().map_err(|e| Error::io(dir, e.error))?;
        log::debug!("created temporary file {}", path.display());
        Ok(Self::new(FsPath::from_std(&path)))
    }

    /// Create the file if it is missing. Existing content is kept.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or opened.
    pub fn create(&self) -> Result<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        log::debug!("created file {}", self.path);
        Ok(())
    }

    /// Remove the file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be removed.
    pub fn delete(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|e| Error::io(&self.path, e))?;
        log::debug!("deleted file {}", self.path);
        Ok(())
    }

    /// Copy content and permissions to `dest`, which must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `dest` exists or the copy fails.
    pub fn copy(&self, dest: &FsPath) -> Result<Self> {
        ensure_vacant(dest)?;
        fs::copy(&self.path, dest).map_err(|e| Error::io(&self.path, e))?;
        log::debug!("copied {} to {dest}", self.path);
        Ok(Self::new(dest.clone()))
    }

    /// Open the file with a C-style mode string.
    ///
    /// Accepted modes are `r`, `w`, `a`, `r+`, `w+` and `a+`; a `b` anywhere
    /// in the string is ignored.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown mode and an I/O error if
    /// the file cannot be opened.
    pub fn open(&self, mode: &str) -> Result<fs::File> {
        let options = open_options(mode)?;
        options.open(&self.path).map_err(|e| Error::io(&self.path, e))
    }

    /// Read the whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))
    }

    /// Replace the file's content, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn write(&self, contents: impl AsRef<[u8]>) -> Result<()> {
        fs::write(&self.path, contents).map_err(|e| Error::io(&self.path, e))
    }
}

fn open_options(mode: &str) -> Result<OpenOptions> {
    let mut options = OpenOptions::new();
    let normalized: String = mode.chars().filter(|c| *c != 'b').collect();
    match normalized.as_str() {
        "r" => options.read(true),
        "w" => options.write(true).create(true).truncate(true),
        "a" => options.append(true).create(true),
        "r+" => options.read(true).write(true),
        "w+" => options.read(true).write(true).create(true).truncate(true),
        "a+" => options.read(true).append(true).create(true),
        _ => {
            return Err(Error::Validation {
                field: "open mode".into(),
                message: format!("Invalid open mode: '{mode}' (expected r, w, a, r+, w+, a+)"),
            });
        }
    };
    Ok(options)
}

impl FsEntity for File {
    fn path(&self) -> &FsPath {
        &self.path
    }

    fn set_path(&mut self, path: FsPath) {
        self.path = path;
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        super::same_entity(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    fn file_in(temp: &TempDir, name: &str) -> File {
        File::new(FsPath::from_std(temp.path()).child(name))
    }

    #[test]
    fn test_create_and_delete() {
        let temp = TempDir::new().unwrap();
        let file = file_in(&temp, "t.test");
        assert!(!file.exists());

        file.create().unwrap();
        assert!(file.exists());
        assert_eq!(file.size().unwrap(), 0);

        file.delete().unwrap();
        assert!(!file.exists());
        assert!(file.delete().unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_keeps_content() {
        let temp = TempDir::new().unwrap();
        let file = file_in(&temp, "keep");
        file.write("data").unwrap();
        file.create().unwrap();
        assert_eq!(file.read_to_string().unwrap(), "data");
    }

    #[test]
    fn test_temp() {
        let temp = TempDir::new().unwrap();
        let file = File::temp_in(temp.path()).unwrap();
        assert!(file.exists());
        assert!(file.name().starts_with(TEMP_PREFIX));
        assert!(file.entry_type().contains(crate::path::EntryKind::File));
    }

    #[test]
    fn test_temp_in_system_dir() {
        let file = File::temp().unwrap();
        assert!(file.exists());
        file.delete().unwrap();
    }

    #[test]
    fn test_copy() {
        let temp = TempDir::new().unwrap();
        let source = file_in(&temp, "a");
        source.write("content").unwrap();

        let copy = source.copy(&FsPath::from_std(temp.path()).child("b")).unwrap();
        assert_eq!(copy.read_to_string().unwrap(), "content");
        assert_ne!(source, copy);
    }

    #[test]
    fn test_copy_onto_existing_fails() {
        let temp = TempDir::new().unwrap();
        let source = file_in(&temp, "a");
        let dest = file_in(&temp, "b");
        source.write("new").unwrap();
        dest.write("old").unwrap();

        assert!(source.copy(dest.path()).unwrap_err().is_already_exists());
        assert_eq!(dest.read_to_string().unwrap(), "old");
    }

    #[test]
    fn test_open_modes() {
        let temp = TempDir::new().unwrap();
        let file = file_in(&temp, "f");

        file.open("w").unwrap().write_all(b"one").unwrap();
        file.open("ab").unwrap().write_all(b"two").unwrap();

        let mut text = String::new();
        file.open("r").unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "onetwo");

        file.open("w+").unwrap();
        assert_eq!(file.size().unwrap(), 0);
    }

    #[test]
    fn test_open_invalid_mode() {
        let temp = TempDir::new().unwrap();
        let file = file_in(&temp, "f");
        assert!(matches!(
            file.open("rw").unwrap_err(),
            Error::Validation { .. }
        ));
        assert!(file.open("r").unwrap_err().is_not_found());
    }
}
