//! Command to concatenate segments onto a path.

use crate::error::CliError;
use crate::utils::{load_configuration, working_dir, GlobalOptions};
use clap::Args;

/// Append each SUFFIX to PATH in turn and print the result.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Segments to append; each may hold several components
    #[arg(value_name = "SUFFIX", required = true)]
    pub suffixes: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let cwd = working_dir(global, &config)?;
        let joined = self
            .suffixes
            .iter()
            .fold(cwd.resolve(&self.path), |path, suffix| cwd.join(&path, suffix));

        println!("{joined}");
        Ok(())
    }
}
