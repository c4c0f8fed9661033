//! Filesystem paths as indexable component sequences.
//!
//! This module provides the [`FsPath`] value type and the pieces it is built
//! from.
//!
//! # Key Concepts
//!
//! ## Expansion
//!
//! Raw strings pass through an [`Expander`] before parsing:
//! - `~` and `~user` become home directories
//! - `$NAME`, `${NAME}` (and `%NAME%` on Windows) become variable values
//! - Relative results are joined onto a [`WorkingDir`]
//!
//! ## Components
//!
//! The expanded string is parsed into canonical [`Components`]: component 0
//! is the root, empty and `.` segments are dropped, `..` consumes the
//! segment before it. Indexed reads return ancestor paths; writes splice
//! the segments of the assigned value in place.
//!
//! ## Links
//!
//! [`TypeTags`] classify entries additively: a symlink reports the kind of
//! its target followed by `link`. [`FsPath::real`] dereferences link chains
//! with loop detection.
//!
//! # Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use fspath::path::{FsPath, WorkingDir};
//!
//! let cwd = WorkingDir::detached(FsPath::from_absolute("/tmp"));
//! let mut p = cwd.resolve("/usr/local/bin");
//!
//! p.replace(-1, "share").unwrap();
//! p.replace(-2, "testfolder/test2").unwrap();
//! assert_eq!(p, "/usr/testfolder/test2/share");
//!
//! p.replace_range(-3..-1, "bin").unwrap();
//! assert_eq!(p, "/usr/bin/share");
//! assert_eq!(cwd.resolve("."), "/tmp");
//! # }
//! ```

mod components;
mod expand;
pub mod link;
mod value;
mod working_dir;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use components::Components;
pub use expand::Expander;
pub use link::{EntryKind, FileIdentity, LinkMode, TypeTags};
pub use value::FsPath;
pub use working_dir::WorkingDir;
