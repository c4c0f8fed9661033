//! Command to delete path components.

use crate::error::CliError;
use crate::utils::{parse_selection, resolve, GlobalOptions, Selection};
use clap::Args;

/// Delete the selected components and print the result.
#[derive(Args)]
pub struct DeleteCommand {
    /// Path to modify
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Component selection: I, I:J, I:, :J or :
    #[arg(value_name = "RANGE", allow_hyphen_values = true)]
    pub range: String,
}

impl DeleteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, mut path) = resolve(global, &self.path)?;

        match parse_selection(&self.range)? {
            Selection::Index(index) => path.delete(index)?,
            Selection::Range(slice) => path.delete_range(slice),
        }

        println!("{path}");
        Ok(())
    }
}
