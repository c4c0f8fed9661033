//! Expansion of user shorthand in raw path strings.
//!
//! Expansion runs in this order:
//! 1. `~` and `~user` at the start of the string become home directories
//! 2. `$NAME` and `${NAME}` (and `%NAME%` on Windows) become variable values
//! 3. A result that is still relative is joined onto the working directory
//!
//! Expansion is best-effort: an unknown user or an undefined variable is
//! left in the text exactly as written.

use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::config::Config;
use crate::path::FsPath;

/// Expands `~`, `~user` and environment variables in raw path strings.
///
/// # Examples
///
/// ```
/// use fspath::path::Expander;
///
/// let expander = Expander::new();
/// let home = expander.expand_text("~");
/// assert!(!home.starts_with('~'));
///
/// let literal = Expander::new()
///     .with_variables(false)
///     .expand_text("$HOME/project");
/// assert_eq!(literal, "$HOME/project");
/// ```
#[derive(Debug, Clone)]
pub struct Expander {
    expand_variables: bool,
}

impl Default for Expander {
    fn default() -> Self {
        Self {
            expand_variables: true,
        }
    }
}

impl Expander {
    /// Create an expander with variable expansion enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an expander from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_variables(config.expand_variables())
    }

    /// Configure whether environment variables are expanded.
    ///
    /// Tilde expansion is always performed.
    #[must_use]
    pub fn with_variables(mut self, expand: bool) -> Self {
        self.expand_variables = expand;
        self
    }

    /// Returns whether environment variables are expanded.
    #[must_use]
    pub fn expands_variables(&self) -> bool {
        self.expand_variables
    }

    /// Expand shorthand without making the result absolute.
    #[must_use]
    pub fn expand_text(&self, raw: &str) -> String {
        self.expand_suffix(&expand_tilde(raw))
    }

    /// Expand variables in text that will follow other segments.
    ///
    /// A `~` is only special at the start of a whole path, so it is left
    /// alone here.
    #[must_use]
    pub fn expand_suffix(&self, text: &str) -> String {
        if !self.expand_variables {
            return text.to_string();
        }

        let text = shellexpand::env_with_context_no_errors(text, |name: &str| env::var(name).ok())
            .into_owned();
        if cfg!(windows) {
            expand_percent_vars(&text)
        } else {
            text
        }
    }

    /// Expand shorthand and resolve the result against `cwd`.
    ///
    /// The returned string is always rooted.
    #[must_use]
    pub fn expand(&self, raw: &str, cwd: &FsPath) -> String {
        let text = self.expand_text(raw);
        if is_rooted(&text) {
            text
        } else {
            log::trace!("resolving relative path {text:?} against {cwd}");
            format!("{cwd}{MAIN_SEPARATOR_STR}{text}")
        }
    }
}

/// Returns true if `text` names a location from a root rather than from the
/// working directory.
pub(crate) fn is_rooted(text: &str) -> bool {
    Path::new(text).is_absolute() || text.starts_with(std::path::is_separator)
}

fn expand_tilde(raw: &str) -> String {
    let Some(rest) = raw.strip_prefix('~') else {
        return raw.to_string();
    };

    let (user, tail) = match rest.find(std::path::is_separator) {
        Some(at) => rest.split_at(at),
        None => (rest, ""),
    };

    let home = if user.is_empty() {
        home::home_dir()
    } else {
        user_home(user)
    };

    match home {
        Some(home) => format!("{}{tail}", home.to_string_lossy()),
        None => {
            log::debug!("no home directory for {raw:?}; leaving it unexpanded");
            raw.to_string()
        }
    }
}

#[cfg(unix)]
fn user_home(name: &str) -> Option<PathBuf> {
    nix::unistd::User::from_name(name)
        .ok()
        .flatten()
        .map(|user| user.dir)
}

#[cfg(not(unix))]
fn user_home(_name: &str) -> Option<PathBuf> {
    None
}

/// Expands `%NAME%` references, leaving undefined names and stray `%` as is.
#[cfg_attr(not(windows), allow(dead_code))]
fn expand_percent_vars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('%') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('%') {
            Some(close) if close > 0 => {
                let name = &after[..close];
                match env::var(name) {
                    Ok(value) => out.push_str(&value),
                    Err(_) => {
                        out.push('%');
                        out.push_str(name);
                        out.push('%');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
