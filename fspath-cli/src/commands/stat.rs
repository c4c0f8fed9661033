//! Command to show entry metadata.

use crate::error::CliError;
use crate::utils::{format_timestamp, resolve, GlobalOptions, OutputFormat};
use clap::Args;
use fspath::{FsEntity, Node};
use serde::Serialize;

/// Show type, size, owner permissions and timestamps of PATH.
#[derive(Args)]
pub struct StatCommand {
    /// Entry to inspect (links are followed)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Stat {
    path: String,
    #[serde(rename = "type")]
    tags: Vec<String>,
    size: u64,
    owner: String,
    accessed: i64,
    modified: i64,
    changed: i64,
}

impl StatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.path)?;
        let node = Node::new(path);

        let stat = Stat {
            path: node.path().to_string(),
            tags: node
                .entry_type()
                .to_vec()
                .iter()
                .map(ToString::to_string)
                .collect(),
            size: node.size()?,
            owner: node.owner_mode()?.to_string(),
            accessed: node.last_access()?,
            modified: node.last_change()?,
            changed: node.ctime()?,
        };

        match self.format {
            OutputFormat::Human => {
                println!("Path: {}", stat.path);
                println!("Type: {}", stat.tags.join(", "));
                println!("Size: {}", stat.size);
                println!("Owner: {}", stat.owner);
                println!("Accessed: {}", format_timestamp(stat.accessed));
                println!("Modified: {}", format_timestamp(stat.modified));
                println!("Changed: {}", format_timestamp(stat.changed));
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(&stat)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
