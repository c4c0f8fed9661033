//! The [`FsPath`] value type.

use std::fmt;
use std::fs;
use std::ops::Add;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::config::DEFAULT_MAX_SYMLINK_DEPTH;
use crate::entity::Entity;
use crate::error::Result;
use crate::path::components::Components;
use crate::path::expand::{is_rooted, Expander};
use crate::path::link::{self, FileIdentity, LinkMode, TypeTags};
use crate::path::working_dir::WorkingDir;
use crate::sequence::Slice;

/// A canonical absolute filesystem path viewed as a sequence of components.
///
/// Component 0 is the root; indexed reads return ancestor paths rather than
/// bare names. Writes and deletes splice the component sequence in place and
/// keep the string form in step.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use fspath::FsPath;
///
/// let mut p = FsPath::from_absolute("/usr/local/bin");
/// assert_eq!(p.len(), 4);
/// assert_eq!(p.prefix_through(1).unwrap(), "/usr");
/// assert_eq!(p.prefix_through(-1).unwrap(), p);
///
/// p.replace(3, "share/somelib").unwrap();
/// assert_eq!(p, "/usr/local/share/somelib");
///
/// p.delete_range(2..);
/// assert_eq!(p, "/usr");
/// assert_eq!(&p + "local/bin", "/usr/local/bin");
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FsPath {
    components: Components,
    rendered: String,
}

impl FsPath {
    /// Parse `raw` through expansion, resolving relative input against `cwd`.
    #[must_use]
    pub fn parse(raw: &str, cwd: &WorkingDir) -> Self {
        cwd.resolve(raw)
    }

    /// Build a path from an already absolute string, without expansion.
    ///
    /// Text without a root is taken to start at the root.
    #[must_use]
    pub fn from_absolute(absolute: &str) -> Self {
        Self::from_components(Components::parse(absolute))
    }

    /// Build a path from an absolute standard-library path.
    #[must_use]
    pub fn from_std(path: &Path) -> Self {
        Self::from_absolute(&path.to_string_lossy())
    }

    /// The filesystem root.
    #[must_use]
    pub fn root() -> Self {
        Self::from_components(Components::root())
    }

    fn from_components(components: Components) -> Self {
        let rendered = components.render();
        Self {
            components,
            rendered,
        }
    }

    fn refresh(&mut self) {
        self.rendered = self.components.render();
    }

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// The underlying component sequence.
    #[must_use]
    pub fn components(&self) -> &Components {
        &self.components
    }

    /// Number of components, root included.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true for the filesystem root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.components.is_root()
    }

    /// The leaf segment name (empty for the root).
    #[must_use]
    pub fn name(&self) -> &str {
        self.components.leaf()
    }

    /// The containing directory, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            None
        } else {
            self.prefix_through(-2).ok()
        }
    }

    /// The bare component name at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) for an index
    /// outside the sequence.
    pub fn component(&self, index: isize) -> Result<&str> {
        self.components.get(index)
    }

    /// The ancestor path through component `index` (the indexed read).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) for an index
    /// outside the sequence.
    pub fn prefix_through(&self, index: isize) -> Result<Self> {
        self.components.prefix_through(index).map(Self::from_components)
    }

    /// Replace component `index` with the segments of `value`.
    ///
    /// # Errors
    ///
    /// Fails with `OutOfRange` for a bad index and `InvalidOperation` for the
    /// root component. The path is unchanged on error.
    pub fn replace(&mut self, index: isize, value: &str) -> Result<()> {
        self.components.replace(index, value)?;
        self.refresh();
        Ok(())
    }

    /// Splice the segments of `value` into the selected range.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidOperation` if the range starts at the root.
    pub fn replace_range(&mut self, range: impl Into<Slice>, value: &str) -> Result<()> {
        self.components.replace_range(range.into(), value)?;
        self.refresh();
        Ok(())
    }

    /// Remove component `index`.
    ///
    /// # Errors
    ///
    /// Fails with `OutOfRange` for a bad index and `InvalidOperation` for the
    /// root component.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        self.components.delete(index)?;
        self.refresh();
        Ok(())
    }

    /// Remove the selected range; a range covering the root leaves the root.
    pub fn delete_range(&mut self, range: impl Into<Slice>) {
        self.components.delete_range(range.into());
        self.refresh();
    }

    /// Concatenate `suffix` (possibly several segments) onto a copy of this
    /// path, expanding variables in it with the default [`Expander`].
    ///
    /// The result equals parsing the rendered path, a separator and `suffix`
    /// as one string, so a `~` inside `suffix` stays literal.
    #[must_use]
    pub fn join(&self, suffix: &str) -> Self {
        self.join_with(suffix, &Expander::default())
    }

    /// Concatenate `suffix` using `expander` for its variables.
    #[must_use]
    pub fn join_with(&self, suffix: &str, expander: &Expander) -> Self {
        let suffix = expander.expand_suffix(suffix);
        Self::from_absolute(&format!("{}{MAIN_SEPARATOR_STR}{suffix}", self.rendered))
    }

    /// Append a literal child name, without expansion.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut components = self.components.clone();
        components.push(name);
        Self::from_components(components)
    }

    /// Returns true if an entry exists here, following symlinks.
    ///
    /// Any failure (absence, permission denial, broken or looping links)
    /// reads as `false`.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::metadata(&self.rendered).is_ok()
    }

    /// Classify the entry at this path.
    #[must_use]
    pub fn entry_type(&self) -> TypeTags {
        link::entry_type(self.as_ref())
    }

    /// Create a symbolic link here that stores `target` verbatim.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the link cannot be created.
    pub fn link(&self, target: impl AsRef<Path>) -> Result<()> {
        link::symlink(self.as_ref(), target.as_ref())
    }

    /// Make `other` a link that points at this path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the link cannot be created.
    pub fn link_from(&self, other: &Self, mode: LinkMode) -> Result<()> {
        link::link_from(self.as_ref(), other.as_ref(), mode)
    }

    /// Fully dereference symlinks and return the canonical target.
    ///
    /// # Errors
    ///
    /// Returns `SymlinkLoop` for cyclic links and an I/O error if an
    /// existing component cannot be canonicalized.
    pub fn real(&self) -> Result<Self> {
        self.real_with_depth(DEFAULT_MAX_SYMLINK_DEPTH)
    }

    /// Like [`FsPath::real`] with an explicit limit on links followed.
    ///
    /// # Errors
    ///
    /// See [`FsPath::real`].
    pub fn real_with_depth(&self, max_depth: usize) -> Result<Self> {
        link::real(self.as_ref(), max_depth).map(|real| Self::from_std(&real))
    }

    /// Device and inode of the entry at this path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry cannot be inspected.
    pub fn identity(&self) -> Result<FileIdentity> {
        link::identity(self.as_ref())
    }

    /// The file, directory or generic entity at this path.
    #[must_use]
    pub fn get(&self) -> Entity {
        Entity::from_path(self.clone())
    }

    /// Convert to a standard-library path.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.rendered)
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl fmt::Debug for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FsPath({})", self.rendered)
    }
}

impl AsRef<Path> for FsPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.rendered)
    }
}

impl AsRef<str> for FsPath {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl From<&FsPath> for PathBuf {
    fn from(path: &FsPath) -> Self {
        path.to_path_buf()
    }
}

impl PartialEq<str> for FsPath {
    /// Equal when `other`, after expansion, is rooted and canonicalizes to
    /// the same components. Relative strings never compare equal; resolve
    /// them through a [`WorkingDir`] first.
    fn eq(&self, other: &str) -> bool {
        let expanded = Expander::default().expand_text(other);
        is_rooted(&expanded) && Components::parse(&expanded) == self.components
    }
}

impl PartialEq<&str> for FsPath {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for FsPath {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl Add<&str> for &FsPath {
    type Output = FsPath;

    fn add(self, suffix: &str) -> FsPath {
        self.join(suffix)
    }
}

impl Add<&str> for FsPath {
    type Output = FsPath;

    fn add(self, suffix: &str) -> FsPath {
        self.join(suffix)
    }
}
