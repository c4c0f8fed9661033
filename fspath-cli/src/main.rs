//! Main entry point for the fspath CLI.
//!
//! Path arguments are expanded and resolved against the current directory,
//! then handed to the `fspath` library:
//! - `show`, `get`, `set`, `delete`, `join`: component arithmetic
//! - `type`, `real`, `link`: entry classification and links
//! - `ls`, `stat`, `access`, `chmod`: inspection
//! - `mkdir`, `touch`, `rm`, `cp`, `mv`: filesystem changes

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = fspath::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        eprintln!("Warning: logger already installed");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        no_expand: cli.no_expand,
    };

    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Type(cmd) => cmd.execute(&global),
        cli::Command::Real(cmd) => cmd.execute(&global),
        cli::Command::Link(cmd) => cmd.execute(&global),
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::Access(cmd) => cmd.execute(&global),
        cli::Command::Chmod(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Touch(cmd) => cmd.execute(&global),
        cli::Command::Rm(cmd) => cmd.execute(&global),
        cli::Command::Cp(cmd) => cmd.execute(&global),
        cli::Command::Mv(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
