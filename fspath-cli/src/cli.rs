//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AccessCommand, ChmodCommand, CompletionsCommand, CpCommand, DeleteCommand, GetCommand,
    JoinCommand, LinkCommand, LsCommand, MkdirCommand, MvCommand, RealCommand, RmCommand,
    SetCommand, ShowCommand, StatCommand, TouchCommand, TypeCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and edit filesystem paths as component sequences.
#[derive(Parser)]
#[command(name = "fspath")]
#[command(version, about = "Inspect and edit filesystem paths as component sequences", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.fspath/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "FSPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not expand $VARIABLES in path arguments
    #[arg(long, global = true)]
    pub no_expand: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a path in canonical absolute form
    Show(ShowCommand),

    /// Print the path through a component
    Get(GetCommand),

    /// Replace components of a path
    Set(SetCommand),

    /// Delete components of a path
    Delete(DeleteCommand),

    /// Append segments to a path
    Join(JoinCommand),

    /// Print the type tags of an entry
    #[command(name = "type")]
    Type(TypeCommand),

    /// Resolve symbolic links
    Real(RealCommand),

    /// Create a symbolic or hard link
    Link(LinkCommand),

    /// List a directory
    Ls(LsCommand),

    /// Show entry metadata
    Stat(StatCommand),

    /// Check owner permissions
    Access(AccessCommand),

    /// Set owner permissions
    Chmod(ChmodCommand),

    /// Create a directory
    Mkdir(MkdirCommand),

    /// Create an empty file
    Touch(TouchCommand),

    /// Remove an entry
    Rm(RmCommand),

    /// Copy a file or directory
    Cp(CpCommand),

    /// Move or rename an entry
    Mv(MvCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_index_parses() {
        let cli = Cli::try_parse_from(["fspath", "get", "/usr/local/bin", "-2"]).unwrap();
        match cli.command {
            Command::Get(cmd) => assert_eq!(cmd.index, -2),
            _ => panic!("expected get"),
        }
    }

    #[test]
    fn test_negative_range_parses() {
        let cli = Cli::try_parse_from(["fspath", "delete", "/a/b/c", "-2:"]).unwrap();
        match cli.command {
            Command::Delete(cmd) => assert_eq!(cmd.range, "-2:"),
            _ => panic!("expected delete"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fspath", "show", "/tmp", "--verbose", "--no-expand"])
            .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_expand);
    }
}
