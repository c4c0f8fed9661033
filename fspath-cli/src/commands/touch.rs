//! Command to create an empty file.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;
use fspath::File;

/// Create PATH as an empty file if it does not exist.
#[derive(Args)]
pub struct TouchCommand {
    /// File to create
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl TouchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.path)?;
        File::new(path).create()?;
        Ok(())
    }
}
