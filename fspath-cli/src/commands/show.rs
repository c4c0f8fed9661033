//! Command to print a path in canonical form.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;

/// Print the canonical absolute form of a path.
#[derive(Args)]
pub struct ShowCommand {
    /// Path to resolve (expanded and made absolute)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print one component per line instead, root first
    #[arg(long)]
    pub components: bool,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.path)?;

        if self.components {
            for component in path.components().as_slice() {
                println!("{component}");
            }
        } else {
            println!("{path}");
        }
        Ok(())
    }
}
