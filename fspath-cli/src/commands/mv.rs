//! Command to move or rename an entry.

use crate::error::CliError;
use crate::utils::{load_configuration, working_dir, GlobalOptions};
use clap::Args;
use fspath::{FsEntity, Node};

/// Move SOURCE to DEST, which must not exist. Moves across filesystems are
/// not supported.
#[derive(Args)]
pub struct MvCommand {
    /// Entry to move
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Destination path
    #[arg(value_name = "DEST")]
    pub dest: String,
}

impl MvCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let cwd = working_dir(global, &config)?;

        let mut node = Node::new(cwd.resolve(&self.source));
        node.move_to(&cwd.resolve(&self.dest))?;
        Ok(())
    }
}
