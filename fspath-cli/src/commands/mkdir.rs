//! Command to create a directory.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;
use fspath::Dir;

/// Create a directory.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create; its parent must exist
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Permission bits in octal (defaults to the configured dir_mode)
    #[arg(long, value_name = "OCTAL")]
    pub mode: Option<String>,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, path) = resolve(global, &self.path)?;

        let mode = match self.mode {
            Some(ref text) => u32::from_str_radix(text.trim_start_matches("0o"), 8)
                .ok()
                .filter(|mode| *mode <= 0o7777)
                .ok_or_else(|| CliError::InvalidArguments(format!("invalid mode '{text}'")))?,
            None => config.dir_mode()?,
        };

        Dir::new(path).create_with_mode(mode)?;
        Ok(())
    }
}
