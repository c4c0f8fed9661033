//! Environment variable handling for configuration overrides.
//!
//! This module provides support for FSPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::{parse_octal_mode, Config};
use crate::error::{Error, Result};
use std::env;

/// Overrides `max_symlink_depth`.
pub const MAX_SYMLINK_DEPTH_ENV: &str = "FSPATH_MAX_SYMLINK_DEPTH";
/// Overrides `expand_variables`.
pub const EXPAND_VARIABLES_ENV: &str = "FSPATH_EXPAND_VARIABLES";
/// Overrides `dir_mode`.
pub const DIR_MODE_ENV: &str = "FSPATH_DIR_MODE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use fspath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric depth, invalid boolean, non-octal mode).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(depth) = env::var(MAX_SYMLINK_DEPTH_ENV) {
            config.max_symlink_depth = Some(depth.trim().parse().map_err(|_| {
                Error::Validation {
                    field: MAX_SYMLINK_DEPTH_ENV.into(),
                    message: format!("Must be a non-negative integer, got '{depth}'"),
                }
            })?);
        }

        if let Ok(val) = env::var(EXPAND_VARIABLES_ENV) {
            config.expand_variables = Some(Self::parse_bool(EXPAND_VARIABLES_ENV, &val)?);
        }

        if let Ok(mode) = env::var(DIR_MODE_ENV) {
            parse_octal_mode(DIR_MODE_ENV, &mode)?;
            config.dir_mode = Some(mode);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
