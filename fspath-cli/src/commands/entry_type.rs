//! Command to classify a filesystem entry.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;

/// Print the type tags of the entry at PATH (e.g. `dir, link`).
#[derive(Args)]
pub struct TypeCommand {
    /// Path to classify
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl TypeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.path)?;
        println!("{}", path.entry_type());
        Ok(())
    }
}
