//! Command to create links.

use crate::error::CliError;
use crate::utils::{load_configuration, working_dir, GlobalOptions};
use clap::Args;
use fspath::LinkMode;

/// Create LINK pointing at TARGET.
///
/// A symbolic link stores TARGET exactly as given, so relative targets are
/// relative to the link's directory.
#[derive(Args)]
pub struct LinkCommand {
    /// Where to create the link
    #[arg(value_name = "LINK")]
    pub link: String,

    /// What the link points at
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Create a hard link instead of a symbolic link
    #[arg(long)]
    pub hard: bool,
}

impl LinkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let cwd = working_dir(global, &config)?;
        let link = cwd.resolve(&self.link);

        if self.hard {
            cwd.resolve(&self.target).link_from(&link, LinkMode::Hard)?;
        } else {
            link.link(&self.target)?;
        }
        Ok(())
    }
}
