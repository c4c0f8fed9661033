//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, ConfigMerger};
///
/// let low = Config { max_symlink_depth: Some(10), ..Default::default() };
/// let high = Config { max_symlink_depth: Some(20), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_symlink_depth, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given lowest precedence first, into a final config.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.max_symlink_depth.is_some() {
            target.max_symlink_depth = source.max_symlink_depth;
        }

        if source.expand_variables.is_some() {
            target.expand_variables = source.expand_variables;
        }

        if source.dir_mode.is_some() {
            target.dir_mode.clone_from(&source.dir_mode);
        }
    }
}
