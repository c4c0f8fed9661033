#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fspath
//!
//! Filesystem paths as indexable, sliceable component sequences.
//!
//! A path string is expanded (`~`, `~user`, `$NAME`), made absolute against
//! a working directory and parsed into canonical components. Component 0 is
//! the root; reads by index return ancestor paths and writes splice the
//! component list in place, with negative indices and open ranges counting
//! from the end. On top of the path value sit link handling and thin
//! file/directory objects.
//!
//! ## Core Types
//!
//! - [`FsPath`]: the path value
//! - [`WorkingDir`]: the context relative paths resolve against
//! - [`TypeTags`] and [`LinkMode`]: entry classification and link creation
//! - [`File`], [`Dir`], [`Node`] and [`Entity`]: filesystem facades sharing
//!   the [`FsEntity`] trait
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use fspath::{FsPath, WorkingDir};
//!
//! let cwd = WorkingDir::detached(FsPath::from_absolute("/srv"));
//! let mut p = cwd.resolve("/usr/local/bin");
//!
//! assert_eq!(p.len(), 4);
//! assert_eq!(p.prefix_through(1).unwrap(), "/usr");
//!
//! p.replace(3, "share/somelib").unwrap();
//! assert_eq!(p, "/usr/local/share/somelib");
//!
//! p.delete_range(1..);
//! assert_eq!(p, "/");
//! assert_eq!(&p + "usr/bin", "/usr/bin");
//! # }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod path;
pub mod sequence;

pub use config::{Config, ConfigBuilder};
pub use entity::{AccessMode, Dir, Entity, File, FsEntity, Node};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    Components, EntryKind, Expander, FileIdentity, FsPath, LinkMode, TypeTags, WorkingDir,
};
pub use sequence::Slice;
