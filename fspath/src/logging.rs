//! Logging infrastructure for the fspath library.
//!
//! Library code reports filesystem mutations and link resolution through the
//! `log` facade. This module provides a stderr backend for it with three
//! verbosity levels, and the precedence rules used by the CLI to pick one.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "FSPATH_LOG_MODE";

/// How much the CLI reports on stderr, ordered from least to most.
///
/// # Examples
///
/// ```
/// use fspath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parse `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level let through at this setting.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// Stderr backend for the `log` facade.
///
/// Records are written as `LEVEL: message` lines when the configured
/// [`LogLevel`] lets them through. Call [`Logger::install`] once at startup;
/// the direct `error`/`warn`/`info`/`debug` methods are for callers that
/// hold the logger themselves.
///
/// # Examples
///
/// ```
/// use fspath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("shown");
/// logger.debug("dropped below Verbose");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger that lets through records allowed by `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured verbosity.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Make this the process-wide `log` backend and set the max level.
    ///
    /// # Errors
    ///
    /// Fails if another backend is already installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn emit(&self, level: log::Level, message: &str) {
        if level <= self.level.filter() {
            let tag = match level {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN",
                log::Level::Info => "INFO",
                log::Level::Debug | log::Level::Trace => "DEBUG",
            };
            eprintln!("{tag}: {message}");
        }
    }

    /// Write an error line (suppressed only when Quiet).
    pub fn error(&self, message: &str) {
        self.emit(log::Level::Error, message);
    }

    /// Write a warning line.
    pub fn warn(&self, message: &str) {
        self.emit(log::Level::Warn, message);
    }

    /// Write an info line (Verbose only).
    pub fn info(&self, message: &str) {
        self.emit(log::Level::Info, message);
    }

    /// Write a debug line (Verbose only).
    pub fn debug(&self, message: &str) {
        self.emit(log::Level::Debug, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            self.emit(record.level(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Pick a logger level from CLI flags, then `FSPATH_LOG_MODE`, then Normal.
///
/// `verbose` wins when both flags are set. An unparseable environment value
/// is ignored.
///
/// # Examples
///
/// ```
/// use fspath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal);
    Logger::new(level)
}
