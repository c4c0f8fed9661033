//! Configuration system for fspath.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file (`~/.fspath/config.yaml`)
//! - Environment variable overrides (`FSPATH_*`)
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FSPATH_*`)
//! 3. User config (`~/.fspath/config.yaml`) or an explicit file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use fspath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("following at most {} links", config.max_symlink_depth());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use fspath::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         expand_variables: Some(false),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.expand_variables());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_DIR_MODE, DEFAULT_MAX_SYMLINK_DEPTH};
pub use validator::ConfigValidator;
