//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from defaults, files, environment and overrides.
///
/// Sources are applied lowest precedence first:
/// 1. Built-in defaults
/// 2. The user file (or the file given with [`ConfigBuilder::with_file`])
/// 3. `FSPATH_*` environment variables
/// 4. The override given with [`ConfigBuilder::with_config`]
///
/// The result is validated before it is returned.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    skip_files: bool,
    skip_env: bool,
    file: Option<PathBuf>,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `FSPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Read `path` instead of the user configuration file. Unlike the user
    /// file, an explicit file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// value is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            match &self.file {
                Some(path) => sources.push(crate::config::ConfigSource {
                    path: path.clone(),
                    config: ConfigLoader::load_file(path)?,
                }),
                None => sources.extend(ConfigLoader::load_user_config()?),
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
