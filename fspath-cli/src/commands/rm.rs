//! Command to remove an entry.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions};
use clap::Args;
use fspath::{Entity, Node};

/// Remove the entry at PATH. A symbolic link is removed, never its target.
#[derive(Args)]
pub struct RmCommand {
    /// Entry to remove
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Remove directories and their contents
    #[arg(short, long)]
    pub recursive: bool,
}

impl RmCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.path)?;

        if path.entry_type().is_link() {
            Node::new(path).delete()?;
            return Ok(());
        }

        match path.get() {
            Entity::File(file) => file.delete()?,
            Entity::Dir(dir) if self.recursive => dir.delete()?,
            Entity::Dir(_) => {
                return Err(CliError::InvalidArguments(format!(
                    "{path} is a directory (use --recursive)"
                )))
            }
            Entity::Other(node) => node.delete()?,
        }
        Ok(())
    }
}
