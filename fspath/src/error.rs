//! Error types for the fspath library.
//!
//! This module provides the error hierarchy for path parsing, component
//! mutation, link handling and the file/directory facades, using `thiserror`
//! for ergonomic error handling.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with an fspath error.
///
/// # Examples
///
/// ```
/// use fspath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A component index was outside the sequence after negative-index
    /// normalization.
    #[error("index {index} out of range for path with {len} component(s)")]
    OutOfRange {
        /// The index as supplied by the caller.
        index: isize,
        /// The number of components in the path.
        len: usize,
    },

    /// The operation is not allowed on this path (e.g. replacing the root).
    #[error("invalid operation: {reason}")]
    InvalidOperation {
        /// Why the operation was rejected.
        reason: String,
    },

    /// The filesystem rejected an operation.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path the operation was applied to.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A symlink loop was detected while resolving a path.
    #[error("symlink loop detected: {}", path.display())]
    SymlinkLoop {
        /// The path where the loop was detected.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A value failed validation (mode strings, environment overrides).
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Index outside the component sequence.
    OutOfRange,
    /// Rejected mutation.
    InvalidOperation,
    /// Filesystem failure, including symlink loops.
    IoFailure,
    /// Bad input values or configuration.
    Invalid,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "out of range"),
            Self::InvalidOperation => write!(f, "invalid operation"),
            Self::IoFailure => write!(f, "I/O failure"),
            Self::Invalid => write!(f, "invalid input"),
        }
    }
}

impl Error {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Classify this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{Error, ErrorKind};
    ///
    /// let err = Error::OutOfRange { index: 7, len: 3 };
    /// assert_eq!(err.kind(), ErrorKind::OutOfRange);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            Self::Io { .. } | Self::SymlinkLoop { .. } => ErrorKind::IoFailure,
            Self::InvalidPath { .. } | Self::Validation { .. } | Self::Configuration(_) => {
                ErrorKind::Invalid
            }
        }
    }

    /// Check if error indicates an index out of range.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    /// use std::io;
    ///
    /// let err = Error::io("/nonexistent", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// Check if error indicates the destination already exists.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::AlreadyExists)
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_error() {
        let err = Error::OutOfRange { index: -5, len: 4 };
        let display = format!("{err}");
        assert!(display.contains("out of range"));
        assert!(display.contains("-5"));
        assert!(display.contains('4'));
        assert!(err.is_out_of_range());
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_invalid_operation_error() {
        let err = Error::InvalidOperation {
            reason: "cannot delete the root component".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid operation"));
        assert!(display.contains("root component"));
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = Error::io(
            "/tmp/missing",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let display = format!("{err}");
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/tmp/missing"));
        assert!(display.contains("no such file"));
        assert!(err.is_not_found());
        assert!(!err.is_already_exists());
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_io_error_source_is_exposed() {
        use std::error::Error as _;

        let err = Error::io("/x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(err.source().is_some());
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_symlink_loop_is_io_failure() {
        let err = Error::SymlinkLoop {
            path: PathBuf::from("/tmp/loop"),
        };
        assert!(format!("{err}").contains("symlink loop"));
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "mode".to_string(),
            message: "unexpected character 'q'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("mode"));
        assert_eq!(err.kind(), ErrorKind::Invalid);
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::OutOfRange.to_string(), "out of range");
        assert_eq!(ErrorKind::IoFailure.to_string(), "I/O failure");
    }
}
