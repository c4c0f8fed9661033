//! Entry classification, link creation and link resolution.
//!
//! This module provides:
//! - [`entry_type`]: the additive type-tag set of an on-disk entry
//! - [`symlink`], [`hard_link`] and [`link_from`]: link creation
//! - [`real`]: full dereferencing with symlink loop detection
//! - [`identity`]: device and inode, for comparing entries across names

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// One classification label for an on-disk entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A named pipe.
    Fifo,
    /// A Unix domain socket.
    Socket,
    /// A block or character device.
    Device,
    /// Nothing (reachable) is there.
    Missing,
    /// A symbolic link; only ever reported in addition to a base kind.
    Link,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "dir"),
            Self::Fifo => write!(f, "fifo"),
            Self::Socket => write!(f, "socket"),
            Self::Device => write!(f, "device"),
            Self::Missing => write!(f, "missing"),
            Self::Link => write!(f, "link"),
        }
    }
}

/// The ordered type-tag set of an entry: a base kind, then `link` if the
/// entry itself is a symbolic link.
///
/// The base kind of a symlink is the kind of its fully dereferenced target,
/// so a link to a directory reports `[dir, link]` and a dangling link
/// reports `[missing, link]`.
///
/// # Examples
///
/// ```
/// use fspath::path::{EntryKind, TypeTags};
///
/// let tags = TypeTags::new(EntryKind::Directory, true);
/// assert_eq!(tags.to_vec(), [EntryKind::Directory, EntryKind::Link]);
/// assert_eq!(tags.to_string(), "dir, link");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTags {
    base: EntryKind,
    link: bool,
}

impl TypeTags {
    /// Creates a tag set. A `Link` base is recorded as `Missing` plus link.
    #[must_use]
    pub const fn new(base: EntryKind, link: bool) -> Self {
        match base {
            EntryKind::Link => Self {
                base: EntryKind::Missing,
                link: true,
            },
            _ => Self { base, link },
        }
    }

    /// The base kind (never `Link`).
    #[must_use]
    pub const fn base(&self) -> EntryKind {
        self.base
    }

    /// Whether the entry itself is a symbolic link.
    #[must_use]
    pub const fn is_link(&self) -> bool {
        self.link
    }

    /// Whether `kind` is one of the tags.
    #[must_use]
    pub fn contains(&self, kind: EntryKind) -> bool {
        self.base == kind || (self.link && kind == EntryKind::Link)
    }

    /// The tags in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<EntryKind> {
        let mut tags = vec![self.base];
        if self.link {
            tags.push(EntryKind::Link);
        }
        tags
    }
}

impl fmt::Display for TypeTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if self.link {
            write!(f, ", {}", EntryKind::Link)?;
        }
        Ok(())
    }
}

/// How [`link_from`] creates its link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// A symbolic link storing the target path.
    #[default]
    Symbolic,
    /// A second directory entry for the same storage object.
    Hard,
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbolic => write!(f, "symbolic"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for LinkMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "symbolic" | "soft" | "sym" => Ok(Self::Symbolic),
            "hard" => Ok(Self::Hard),
            _ => Err(Error::Validation {
                field: "link mode".into(),
                message: format!("Invalid link mode: '{s}' (expected symbolic/soft/hard)"),
            }),
        }
    }
}

/// Storage identity of an entry: equal for every hard-linked name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    /// Device the entry lives on.
    pub device: u64,
    /// Inode number on that device.
    pub inode: u64,
}

/// Classify the entry at `path`. Never fails; unreadable entries are
/// reported as missing.
#[must_use]
pub fn entry_type(path: &Path) -> TypeTags {
    let Ok(meta) = fs::symlink_metadata(path) else {
        return TypeTags::new(EntryKind::Missing, false);
    };

    if meta.file_type().is_symlink() {
        let base = fs::metadata(path).map_or(EntryKind::Missing, |target| {
            classify(&target.file_type())
        });
        TypeTags::new(base, true)
    } else {
        TypeTags::new(classify(&meta.file_type()), false)
    }
}

fn classify(file_type: &fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        classify_special(file_type)
    }
}

#[cfg(unix)]
fn classify_special(file_type: &fs::FileType) -> EntryKind {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_fifo() {
        EntryKind::Fifo
    } else if file_type.is_socket() {
        EntryKind::Socket
    } else if file_type.is_block_device() || file_type.is_char_device() {
        EntryKind::Device
    } else {
        EntryKind::File
    }
}

#[cfg(not(unix))]
fn classify_special(_file_type: &fs::FileType) -> EntryKind {
    EntryKind::File
}

/// Create a symbolic link at `at` that stores `target` exactly as given.
///
/// # Errors
///
/// Returns an I/O error if the link cannot be created (e.g. `at` exists).
pub fn symlink(at: &Path, target: &Path) -> Result<()> {
    create_symlink(target, at).map_err(|e| Error::io(at, e))?;
    log::debug!("linked {} -> {}", at.display(), target.display());
    Ok(())
}

#[cfg(unix)]
fn create_symlink(target: &Path, at: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, at)
}

#[cfg(windows)]
fn create_symlink(target: &Path, at: &Path) -> io::Result<()> {
    let resolved = match at.parent() {
        Some(parent) if target.is_relative() => parent.join(target),
        _ => target.to_path_buf(),
    };
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, at)
    } else {
        std::os::windows::fs::symlink_file(target, at)
    }
}

/// Create a hard link at `at` for the existing entry `original`.
///
/// # Errors
///
/// Returns an I/O error if the link cannot be created, including links
/// across devices.
pub fn hard_link(original: &Path, at: &Path) -> Result<()> {
    fs::hard_link(original, at).map_err(|e| Error::io(at, e))?;
    log::debug!("hard linked {} => {}", at.display(), original.display());
    Ok(())
}

/// Make `at` a link pointing at `original`.
///
/// # Errors
///
/// Returns an I/O error if the link cannot be created.
pub fn link_from(original: &Path, at: &Path, mode: LinkMode) -> Result<()> {
    match mode {
        LinkMode::Symbolic => symlink(at, original),
        LinkMode::Hard => hard_link(original, at),
    }
}

/// Fully dereference `path`, following at most `max_depth` links.
///
/// The final link target does not need to exist: the longest existing
/// ancestor is canonicalized and the missing remainder appended to it.
///
/// # Errors
///
/// Returns:
/// - `SymlinkLoop` if a link chain revisits a path or exceeds `max_depth`
/// - an I/O error if an existing component cannot be read or canonicalized
pub fn real(path: &Path, max_depth: usize) -> Result<PathBuf> {
    let mut visited = HashSet::new();
    let mut current = path.to_path_buf();
    let mut depth = 0;

    loop {
        if !visited.insert(current.clone()) || depth > max_depth {
            return Err(Error::SymlinkLoop { path: current });
        }

        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let target = fs::read_link(&current).map_err(|e| Error::io(&current, e))?;
                current = if target.is_absolute() {
                    target
                } else {
                    match current.parent() {
                        Some(parent) => parent.join(target),
                        None => target,
                    }
                };
                depth += 1;
            }
            _ => break,
        }
    }

    log::trace!(
        "{} dereferenced to {} after {depth} link(s)",
        path.display(),
        current.display()
    );
    canonicalize_existing(&current)
}

/// Canonicalize the longest existing ancestor of `path` and append the
/// missing remainder to it.
fn canonicalize_existing(path: &Path) -> Result<PathBuf> {
    let mut existing = path.to_path_buf();
    let mut missing = Vec::new();

    loop {
        match fs::canonicalize(&existing) {
            Ok(canonical) => {
                return Ok(missing
                    .into_iter()
                    .rev()
                    .fold(canonical, |acc: PathBuf, name| acc.join(name)));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => match existing.file_name() {
                Some(name) => {
                    missing.push(name.to_os_string());
                    existing.pop();
                }
                None => return Ok(path.to_path_buf()),
            },
            Err(e) => return Err(Error::io(&existing, e)),
        }
    }
}

/// Device and inode of the entry at `path` (links followed).
///
/// # Errors
///
/// Returns an I/O error if the entry cannot be inspected.
#[cfg(unix)]
pub fn identity(path: &Path) -> Result<FileIdentity> {
    use std::os::unix::fs::MetadataExt;

    let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    Ok(FileIdentity {
        device: meta.dev(),
        inode: meta.ino(),
    })
}

/// Storage identity is not exposed on this platform.
///
/// # Errors
///
/// Always returns an `Unsupported` I/O error.
#[cfg(not(unix))]
pub fn identity(path: &Path) -> Result<FileIdentity> {
    Err(Error::io(
        path,
        io::Error::new(
            ErrorKind::Unsupported,
            "storage identity is not available on this platform",
        ),
    ))
}
