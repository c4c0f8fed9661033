//! Command to resolve symbolic links.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;

/// Follow symbolic links and print the canonical target.
#[derive(Args)]
pub struct RealCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl RealCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, path) = resolve(global, &self.path)?;
        let real = path.real_with_depth(config.max_symlink_depth())?;
        log::debug!("{path} resolves to {real}");
        println!("{real}");
        Ok(())
    }
}
