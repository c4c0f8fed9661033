//! Command to copy an entry.

use crate::error::CliError;
use crate::utils::{load_configuration, working_dir, GlobalOptions};
use clap::Args;
use fspath::{Entity, FsEntity};

/// Copy a file, or a directory tree with --recursive. DEST must not exist.
#[derive(Args)]
pub struct CpCommand {
    /// Entry to copy
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Destination path
    #[arg(value_name = "DEST")]
    pub dest: String,

    /// Copy directories recursively
    #[arg(short, long)]
    pub recursive: bool,
}

impl CpCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let cwd = working_dir(global, &config)?;
        let dest = cwd.resolve(&self.dest);

        match cwd.entity(&self.source) {
            Entity::File(file) => {
                file.copy(&dest)?;
            }
            Entity::Dir(dir) if self.recursive => {
                dir.copy(&dest)?;
            }
            Entity::Dir(dir) => {
                return Err(CliError::InvalidArguments(format!(
                    "{} is a directory (use --recursive)",
                    dir.path()
                )))
            }
            Entity::Other(node) => {
                return Err(CliError::InvalidArguments(format!(
                    "cannot copy {} ({})",
                    node.path(),
                    node.entry_type()
                )))
            }
        }
        Ok(())
    }
}
