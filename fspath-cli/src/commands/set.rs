//! Command to replace path components.

use crate::error::CliError;
use crate::utils::{parse_selection, resolve, GlobalOptions, Selection};
use clap::Args;

/// Replace the selected components with VALUE and print the result.
///
/// VALUE may hold several segments (`a/b`) or none (an empty string
/// deletes the selection). An empty range such as `2:2` inserts.
#[derive(Args)]
pub struct SetCommand {
    /// Path to modify
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Component selection: I, I:J, I:, :J or :
    #[arg(value_name = "RANGE", allow_hyphen_values = true)]
    pub range: String,

    /// Replacement segments
    #[arg(value_name = "VALUE")]
    pub value: String,
}

impl SetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, mut path) = resolve(global, &self.path)?;

        match parse_selection(&self.range)? {
            Selection::Index(index) => path.replace(index, &self.value)?,
            Selection::Range(slice) => path.replace_range(slice, &self.value)?,
        }

        println!("{path}");
        Ok(())
    }
}
