//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, path resolution, range parsing and
//! output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use fspath::{Config, ConfigBuilder, Expander, FsPath, Slice, WorkingDir};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Read this configuration file instead of the user file.
    pub config: Option<PathBuf>,

    /// Do not expand environment variables in path arguments.
    pub no_expand: bool,
}

/// Output format for commands that report structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable text.
    #[default]
    Human,
    /// JSON on a single line.
    Json,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The `--config` file, or `~/.fspath/config.yaml`
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The working-directory context used to resolve path arguments.
pub fn working_dir(global: &GlobalOptions, config: &Config) -> Result<WorkingDir, CliError> {
    let expand = config.expand_variables() && !global.no_expand;
    let expander = Expander::from_config(config).with_variables(expand);
    Ok(WorkingDir::from_process()?.with_expander(expander))
}

/// Load configuration and resolve a single path argument.
pub fn resolve(global: &GlobalOptions, raw: &str) -> Result<(Config, FsPath), CliError> {
    let config = load_configuration(global)?;
    let path = working_dir(global, &config)?.resolve(raw);
    Ok((config, path))
}

/// A component selection given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A single component; must exist.
    Index(isize),
    /// A slice; bounds are clamped.
    Range(Slice),
}

/// Parse a component selection: `I`, `I:J`, `I:`, `:J` or `:`.
///
/// Negative numbers count from the end.
pub fn parse_selection(text: &str) -> Result<Selection, CliError> {
    let bound = |part: &str| -> Result<Option<isize>, CliError> {
        let part = part.trim();
        if part.is_empty() {
            return Ok(None);
        }
        part.parse()
            .map(Some)
            .map_err(|_| CliError::InvalidArguments(format!("invalid index '{part}' in '{text}'")))
    };

    match text.split_once(':') {
        Some((start, stop)) => Ok(Selection::Range(Slice::new(bound(start)?, bound(stop)?))),
        None => bound(text)?
            .map(Selection::Index)
            .ok_or_else(|| CliError::InvalidArguments("empty component selection".to_string())),
    }
}

/// Format epoch seconds as a UTC timestamp for display.
pub fn format_timestamp(seconds: i64) -> String {
    use chrono::{DateTime, Utc};
    DateTime::<Utc>::from_timestamp(seconds, 0).map_or_else(
        || seconds.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_forms() {
        assert_eq!(parse_selection("2").unwrap(), Selection::Index(2));
        assert_eq!(parse_selection("-1").unwrap(), Selection::Index(-1));
        let range = |start, stop| Selection::Range(Slice::new(start, stop));
        assert_eq!(parse_selection("1:3").unwrap(), range(Some(1), Some(3)));
        assert_eq!(parse_selection("-3:-1").unwrap(), range(Some(-3), Some(-1)));
        assert_eq!(parse_selection("2:").unwrap(), range(Some(2), None));
        assert_eq!(parse_selection(":2").unwrap(), range(None, Some(2)));
        assert_eq!(parse_selection(":").unwrap(), Selection::Range(Slice::full()));
    }

    #[test]
    fn test_parse_selection_errors() {
        assert!(parse_selection("").is_err());
        assert!(parse_selection("a:b").is_err());
        assert!(parse_selection("1.5").is_err());
        assert_eq!(parse_selection("x").unwrap_err().exit_code(), 4);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(86_400 + 61), "1970-01-02 00:01:01");
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }
}
