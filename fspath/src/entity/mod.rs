//! File, directory and generic entity objects layered on [`FsPath`].
//!
//! Every facade holds a path and implements [`FsEntity`], whose default
//! methods provide the operations shared by all kinds of entries:
//! permission checks, renames and moves, sizes and timestamps.
//!
//! [`Entity`] is the typed result of [`FsPath::get`]: a tagged variant
//! chosen from the entry's [`TypeTags`](crate::path::TypeTags) base kind.
//!
//! # Examples
//!
//! ```no_run
//! use fspath::{Entity, FsEntity, WorkingDir};
//!
//! let cwd = WorkingDir::from_process().unwrap();
//! match cwd.entity("~/notes") {
//!     Entity::Dir(dir) => {
//!         for entry in dir.entries().unwrap() {
//!             println!("{} {}", entry.entry_type(), entry.name());
//!         }
//!     }
//!     Entity::File(file) => println!("{} bytes", file.size().unwrap()),
//!     Entity::Other(node) => println!("{} is {}", node.path(), node.entry_type()),
//! }
//! ```

mod dir;
mod file;
mod mode;
mod node;

use std::fs;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};
use crate::path::{EntryKind, FileIdentity, FsPath, TypeTags};

pub use dir::Dir;
pub use file::File;
pub use mode::AccessMode;
pub use node::Node;

/// Operations shared by every filesystem facade.
///
/// Implementors supply [`FsEntity::path`] and [`FsEntity::set_path`]; the
/// remaining methods are provided. Links are followed for every query
/// except [`FsEntity::entry_type`].
pub trait FsEntity {
    /// The path this facade refers to.
    fn path(&self) -> &FsPath;

    /// Point this facade at a new path after a rename or move.
    fn set_path(&mut self, path: FsPath);

    /// The leaf name.
    fn name(&self) -> &str {
        self.path().name()
    }

    /// Returns true if something exists at the path.
    fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Type tags of the entry.
    fn entry_type(&self) -> TypeTags {
        self.path().entry_type()
    }

    /// Metadata of the entry, links followed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry cannot be inspected.
    fn metadata(&self) -> Result<fs::Metadata> {
        fs::metadata(self.path()).map_err(|e| Error::io(self.path(), e))
    }

    /// Check whether every owner permission in `mode` is set.
    ///
    /// A missing entry grants nothing and reads as `false`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `mode` contains characters other than
    /// `r`, `w`, `x` and `-`.
    fn access(&self, mode: &str) -> Result<bool> {
        let mode: AccessMode = mode.parse()?;
        Ok(fs::metadata(self.path())
            .map(|meta| mode.satisfied_by(mode::mode_bits(&meta.permissions())))
            .unwrap_or(false))
    }

    /// The owner permissions currently set.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry cannot be inspected.
    fn owner_mode(&self) -> Result<AccessMode> {
        let bits = mode::mode_bits(&self.metadata()?.permissions());
        Ok(AccessMode::from_owner_bits(bits))
    }

    /// Set the permission bits to exactly the owner bits named in `mode`.
    ///
    /// Group and other bits are cleared.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad mode string and an I/O error if
    /// the entry is missing or the change is refused.
    fn chmod(&self, mode: &str) -> Result<()> {
        let mode: AccessMode = mode.parse()?;
        let current = self.metadata()?.permissions();
        let permissions = mode::permissions_from_bits(current, mode.owner_bits());
        fs::set_permissions(self.path(), permissions).map_err(|e| Error::io(self.path(), e))?;
        log::debug!("chmod {} {mode}", self.path());
        Ok(())
    }

    /// Rename within the containing directory.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidOperation` for the root and with an I/O error if
    /// the new name is taken or the rename is refused.
    fn rename(&mut self, new_name: &str) -> Result<()> {
        let parent = self.path().parent().ok_or_else(|| Error::InvalidOperation {
            reason: "cannot rename the filesystem root".to_string(),
        })?;
        self.move_to(&parent.child(new_name))
    }

    /// Move to `dest`, which must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `dest` exists or the move is refused
    /// (including moves across devices).
    fn move_to(&mut self, dest: &FsPath) -> Result<()> {
        ensure_vacant(dest)?;
        fs::rename(self.path(), dest).map_err(|e| Error::io(self.path(), e))?;
        log::debug!("moved {} to {dest}", self.path());
        self.set_path(dest.clone());
        Ok(())
    }

    /// Size in bytes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry cannot be inspected.
    fn size(&self) -> Result<u64> {
        Ok(self.metadata()?.len())
    }

    /// Last access time, in seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry or the timestamp is unavailable.
    fn last_access(&self) -> Result<i64> {
        let accessed = self.metadata()?.accessed();
        accessed.map(epoch_seconds).map_err(|e| Error::io(self.path(), e))
    }

    /// Last content modification time, in seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry or the timestamp is unavailable.
    fn last_change(&self) -> Result<i64> {
        let modified = self.metadata()?.modified();
        modified.map(epoch_seconds).map_err(|e| Error::io(self.path(), e))
    }

    /// Status change time on Unix, creation time elsewhere, in seconds since
    /// the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry or the timestamp is unavailable.
    fn ctime(&self) -> Result<i64> {
        let meta = self.metadata()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(meta.ctime())
        }
        #[cfg(not(unix))]
        {
            meta.created()
                .map(epoch_seconds)
                .map_err(|e| Error::io(self.path(), e))
        }
    }

    /// Storage identity of the entry.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry cannot be inspected.
    fn identity(&self) -> Result<FileIdentity> {
        self.path().identity()
    }
}

/// Returns true if `a` and `b` are the same storage object.
///
/// Hard-linked names compare equal. When either identity is unavailable
/// (missing entries, unsupported platforms) the paths are compared instead.
#[must_use]
pub fn same_entity(a: &dyn FsEntity, b: &dyn FsEntity) -> bool {
    match (a.identity(), b.identity()) {
        (Ok(left), Ok(right)) => left == right,
        _ => a.path() == b.path(),
    }
}

/// Fail with `AlreadyExists` if anything, including a dangling link, is at
/// `dest`.
pub(crate) fn ensure_vacant(dest: &FsPath) -> Result<()> {
    if fs::symlink_metadata(dest).is_ok() {
        return Err(Error::io(
            dest,
            io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
        ));
    }
    Ok(())
}

fn epoch_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
    }
}

/// The typed facade for whatever is at a path.
#[derive(Debug, Clone)]
pub enum Entity {
    /// A regular file, or a link to one.
    File(File),
    /// A directory, or a link to one.
    Dir(Dir),
    /// Anything else, including missing entries and dangling links.
    Other(Node),
}

impl Entity {
    /// Pick the facade matching the base kind of the entry at `path`.
    #[must_use]
    pub fn from_path(path: FsPath) -> Self {
        match path.entry_type().base() {
            EntryKind::File => Self::File(File::new(path)),
            EntryKind::Directory => Self::Dir(Dir::new(path)),
            _ => Self::Other(Node::new(path)),
        }
    }

    /// The file facade, if this is a file.
    #[must_use]
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// The directory facade, if this is a directory.
    #[must_use]
    pub fn as_dir(&self) -> Option<&Dir> {
        match self {
            Self::Dir(dir) => Some(dir),
            _ => None,
        }
    }

    /// Returns true for [`Entity::File`].
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Returns true for [`Entity::Dir`].
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }
}

impl FsEntity for Entity {
    fn path(&self) -> &FsPath {
        match self {
            Self::File(file) => file.path(),
            Self::Dir(dir) => dir.path(),
            Self::Other(node) => node.path(),
        }
    }

    fn set_path(&mut self, path: FsPath) {
        match self {
            Self::File(file) => file.set_path(path),
            Self::Dir(dir) => dir.set_path(path),
            Self::Other(node) => node.set_path(path),
        }
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        same_entity(self, other)
    }
}
