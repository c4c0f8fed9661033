//! Command to list a directory.

use crate::error::CliError;
use crate::utils::{resolve, GlobalOptions, OutputFormat};
use clap::Args;
use fspath::{Dir, FsEntity};
use serde::Serialize;

/// List the direct children of DIR, sorted by name.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Listing {
    name: String,
    path: String,
    #[serde(rename = "type")]
    tags: Vec<String>,
}

impl LsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, path) = resolve(global, &self.dir)?;
        let entries = Dir::new(path).entries()?;

        let listings: Vec<Listing> = entries
            .iter()
            .map(|entry| Listing {
                name: entry.name().to_string(),
                path: entry.path().to_string(),
                tags: entry
                    .entry_type()
                    .to_vec()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect();

        match self.format {
            OutputFormat::Human => {
                let width = listings
                    .iter()
                    .map(|l| l.tags.join(", ").len())
                    .max()
                    .unwrap_or(0);
                for listing in &listings {
                    println!("{:<width$}  {}", listing.tags.join(", "), listing.name);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(&listings)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
