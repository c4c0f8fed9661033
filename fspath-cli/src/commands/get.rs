//! Command to print the ancestor path through a component.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;

/// Print the path through component INDEX (0 is the root).
#[derive(Args)]
pub struct GetCommand {
    /// Path to index into
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Component index; negative values count from the end
    #[arg(value_name = "INDEX", allow_negative_numbers = true)]
    pub index: isize,

    /// Print only the component name instead of the ancestor path
    #[arg(long)]
    pub name: bool,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.path)?;

        if self.name {
            println!("{}", path.component(self.index)?);
        } else {
            println!("{}", path.prefix_through(self.index)?);
        }
        Ok(())
    }
}
