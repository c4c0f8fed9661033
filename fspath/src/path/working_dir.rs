//! The working-directory context used to resolve relative paths.

use std::env;

use crate::entity::{Dir, Entity, File, Node};
use crate::error::{Error, Result};
use crate::path::expand::Expander;
use crate::path::FsPath;

/// The current directory that relative paths resolve against.
///
/// A `WorkingDir` is an explicit context value rather than hidden global
/// state. [`WorkingDir::from_process`] mirrors the OS working directory and
/// [`WorkingDir::set`] changes both the context and the OS working directory.
/// Every resolution reads the context at the time of the call.
///
/// # Examples
///
/// ```no_run
/// use fspath::WorkingDir;
///
/// let mut cwd = WorkingDir::from_process().unwrap();
/// cwd.set("/tmp").unwrap();
/// assert_eq!(cwd.resolve("notes.txt"), "/tmp/notes.txt");
/// ```
#[derive(Debug, Clone)]
pub struct WorkingDir {
    current: FsPath,
    expander: Expander,
}

impl WorkingDir {
    /// Initialize from the process's actual working directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the OS working directory cannot be read
    /// (for example, because it was deleted).
    pub fn from_process() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| Error::io(".", e))?;
        Ok(Self::detached(FsPath::from_std(&cwd)))
    }

    /// A context rooted at `current` that does not consult the OS working
    /// directory. [`WorkingDir::set`] still changes the OS working directory.
    #[must_use]
    pub fn detached(current: FsPath) -> Self {
        Self {
            current,
            expander: Expander::default(),
        }
    }

    /// Use `expander` for subsequent resolutions.
    #[must_use]
    pub fn with_expander(mut self, expander: Expander) -> Self {
        self.expander = expander;
        self
    }

    /// The current directory.
    #[must_use]
    pub fn current(&self) -> &FsPath {
        &self.current
    }

    /// The expander used for resolutions.
    #[must_use]
    pub fn expander(&self) -> &Expander {
        &self.expander
    }

    /// Expand `raw` and resolve it against the current directory.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> FsPath {
        FsPath::from_absolute(&self.expander.expand(raw, &self.current))
    }

    /// Concatenate `suffix` onto `base` using this context's expander.
    #[must_use]
    pub fn join(&self, base: &FsPath, suffix: &str) -> FsPath {
        base.join_with(suffix, &self.expander)
    }

    /// Returns true if `raw`, resolved in this context, names `path`.
    ///
    /// Unlike `FsPath == str`, relative strings are made absolute against
    /// the current directory before comparing.
    #[must_use]
    pub fn eq_str(&self, path: &FsPath, raw: &str) -> bool {
        self.resolve(raw) == *path
    }

    /// Change the current directory, in this context and in the OS.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the OS refuses the change; the context is left
    /// untouched in that case.
    pub fn set(&mut self, raw: &str) -> Result<()> {
        let target = self.resolve(raw);
        env::set_current_dir(&target).map_err(|e| Error::io(&target, e))?;
        log::debug!("working directory changed to {target}");
        self.current = target;
        Ok(())
    }

    /// A file facade for `raw`.
    #[must_use]
    pub fn file(&self, raw: &str) -> File {
        File::new(self.resolve(raw))
    }

    /// A directory facade for `raw`.
    #[must_use]
    pub fn dir(&self, raw: &str) -> Dir {
        Dir::new(self.resolve(raw))
    }

    /// A generic entity facade for `raw`.
    #[must_use]
    pub fn node(&self, raw: &str) -> Node {
        Node::new(self.resolve(raw))
    }

    /// The typed entity currently found at `raw`.
    #[must_use]
    pub fn entity(&self, raw: &str) -> Entity {
        Entity::from_path(self.resolve(raw))
    }
}
