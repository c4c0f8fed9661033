//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "fspath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            match self.shell {
                Shell::Bash => eprintln!(
                    "# eval \"$({BIN_NAME} completions bash)\" in ~/.bashrc to enable"
                ),
                Shell::Zsh => eprintln!(
                    "# {BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME} (must be on $fpath)"
                ),
                Shell::Fish => eprintln!(
                    "# {BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
                ),
                Shell::PowerShell => eprintln!(
                    "# {BIN_NAME} completions powershell | Out-String | Invoke-Expression"
                ),
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
