//! Configuration validation.

use crate::config::schema::{parse_octal_mode, Config};
use crate::error::{Error, Result};

/// Upper bound accepted for `max_symlink_depth`.
pub const MAX_SYMLINK_DEPTH_LIMIT: usize = 1024;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { dir_mode: Some("9".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(depth) = config.max_symlink_depth {
            if depth == 0 || depth > MAX_SYMLINK_DEPTH_LIMIT {
                return Err(Error::Validation {
                    field: "max_symlink_depth".into(),
                    message: format!("Must be between 1 and {MAX_SYMLINK_DEPTH_LIMIT}"),
                });
            }
        }

        if let Some(ref mode) = config.dir_mode {
            parse_octal_mode("dir_mode", mode)?;
        }

        Ok(())
    }
}
