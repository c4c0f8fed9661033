//! Configuration schema definitions.
//!
//! This module defines the configuration structure for fspath and the
//! defaults applied when a field is left unset.

use serde::{Deserialize, Serialize};

/// Links followed by `real` before a chain is reported as a loop.
pub const DEFAULT_MAX_SYMLINK_DEPTH: usize = 40;

/// Permission bits for directories created without an explicit mode.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; the accessor methods apply the built-in defaults.
///
/// # Examples
///
/// ```
/// use fspath::config::Config;
///
/// let config: Config = serde_yaml::from_str("max_symlink_depth: 8\n").unwrap();
/// assert_eq!(config.max_symlink_depth(), 8);
/// assert!(config.expand_variables());
/// assert_eq!(config.dir_mode().unwrap(), 0o755);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of symlinks followed when resolving a real path.
    pub max_symlink_depth: Option<usize>,

    /// Whether `$NAME`/`${NAME}` references are expanded in raw paths.
    pub expand_variables: Option<bool>,

    /// Default directory permission bits, as an octal string (e.g. `"750"`).
    pub dir_mode: Option<String>,
}

impl Config {
    /// Effective symlink depth limit.
    #[must_use]
    pub fn max_symlink_depth(&self) -> usize {
        self.max_symlink_depth.unwrap_or(DEFAULT_MAX_SYMLINK_DEPTH)
    }

    /// Effective variable-expansion switch.
    #[must_use]
    pub fn expand_variables(&self) -> bool {
        self.expand_variables.unwrap_or(true)
    }

    /// Effective directory mode.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `dir_mode` is not an octal number of at
    /// most `0o7777`.
    pub fn dir_mode(&self) -> crate::Result<u32> {
        match &self.dir_mode {
            Some(mode) => parse_octal_mode("dir_mode", mode),
            None => Ok(DEFAULT_DIR_MODE),
        }
    }
}

/// Parse an octal permission string such as `"755"` or `"0o700"`.
pub(crate) fn parse_octal_mode(field: &str, text: &str) -> crate::Result<u32> {
    let digits = text.trim().trim_start_matches("0o");
    u32::from_str_radix(digits, 8)
        .ok()
        .filter(|mode| *mode <= 0o7777)
        .ok_or_else(|| crate::Error::Validation {
            field: field.into(),
            message: format!("Invalid octal mode: '{text}'"),
        })
}
