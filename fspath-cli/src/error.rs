//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use fspath::{Error as LibError, ErrorKind};
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error outside the library (e.g. writing output).
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., access denied) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., access check denied)
    /// - 4: Invalid arguments, including bad mode strings
    /// - 5: I/O error, including symlink loops
    /// - 6: Other library error (index out of range, root mutation)
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(lib_err) => match lib_err.kind() {
                ErrorKind::Invalid => 4,
                ErrorKind::IoFailure => 5,
                ErrorKind::OutOfRange | ErrorKind::InvalidOperation => 6,
            },
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("denied".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("bad".into()).exit_code(), 4);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 7);
        assert_eq!(
            CliError::from(std::io::Error::from(std::io::ErrorKind::Other)).exit_code(),
            5
        );
    }

    #[test]
    fn test_library_exit_codes() {
        let out_of_range = CliError::from(LibError::OutOfRange { index: 9, len: 2 });
        assert_eq!(out_of_range.exit_code(), 6);

        let io = CliError::from(LibError::io(
            "/x",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
        assert_eq!(io.exit_code(), 5);

        let validation = CliError::from(LibError::Validation {
            field: "mode".into(),
            message: "bad".into(),
        });
        assert_eq!(validation.exit_code(), 4);
    }
}
