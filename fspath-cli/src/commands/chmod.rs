//! Command to set owner permissions.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;
use fspath::{FsEntity, Node};

/// Set the permissions of PATH to exactly the owner bits in MODE.
///
/// Group and other permissions are cleared.
#[derive(Args)]
pub struct ChmodCommand {
    /// Entry to change (links are followed)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Owner permissions, from r, w and x (`-` placeholders allowed)
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    pub mode: String,
}

impl ChmodCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.path)?;
        Node::new(path).chmod(&self.mode)?;
        Ok(())
    }
}
