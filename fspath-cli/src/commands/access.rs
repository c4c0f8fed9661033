//! Command to check owner permissions.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;
use fspath::{FsEntity, Node};

/// Exit 0 if every owner permission in MODE is set on PATH, 1 otherwise.
#[derive(Args)]
pub struct AccessCommand {
    /// Entry to check (links are followed)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Permissions to require, from r, w and x
    #[arg(value_name = "MODE")]
    pub mode: String,
}

impl AccessCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.path)?;
        let node = Node::new(path);

        if node.access(&self.mode)? {
            log::info!("{} grants {}", node.path(), self.mode);
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Access '{}' not granted on {}",
                self.mode,
                node.path()
            )))
        }
    }
}
