//! Configuration file discovery and loading.
//!
//! This module locates the fspath user configuration file and loads YAML
//! configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory under the home directory.
pub const CONFIG_DIR_NAME: &str = ".fspath";

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use fspath::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config().unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `~/.fspath/config.yaml` if it exists.
    ///
    /// A missing home directory or a missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<ConfigSource>> {
        match Self::user_config_path() {
            Some(path) => Self::load_optional(&path),
            None => {
                log::debug!("no home directory; skipping user configuration");
                Ok(None)
            }
        }
    }

    /// Load `path` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<ConfigSource>> {
        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource {
            path: path.to_path_buf(),
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the user configuration file, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
