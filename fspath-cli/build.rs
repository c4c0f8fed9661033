//! Build script for fspath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this in step with src/cli.rs.
fn build_cli() -> Command {
    Command::new("fspath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit filesystem paths as component sequences")
        .long_about(
            "Resolve, index, slice and splice filesystem paths, follow links and \
             manage the entries they name",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.fspath/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("FSPATH_CONFIG"),
        )
        .arg(
            Arg::new("no-expand")
                .long("no-expand")
                .help("Do not expand $VARIABLES in path arguments")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Print a path in canonical absolute form")
                .long_about("Expand and resolve a path, optionally one component per line"),
            Command::new("get")
                .about("Print the path through a component")
                .long_about("Print the ancestor path ending at a component index; 0 is the root"),
            Command::new("set")
                .about("Replace components of a path")
                .long_about("Splice a value into a component index or range (I, I:J, I:, :J, :)"),
            Command::new("delete")
                .about("Delete components of a path")
                .long_about("Remove a component index or range; the root always remains"),
            Command::new("join")
                .about("Append segments to a path"),
            Command::new("type")
                .about("Print the type tags of an entry")
                .long_about("Classify an entry as file, dir, fifo, socket, device or missing, plus link"),
            Command::new("real")
                .about("Resolve symbolic links")
                .long_about("Follow a chain of symbolic links to its canonical target"),
            Command::new("link")
                .about("Create a symbolic or hard link"),
            Command::new("ls")
                .about("List a directory")
                .long_about("List the children of a directory, sorted by name"),
            Command::new("stat")
                .about("Show entry metadata"),
            Command::new("access")
                .about("Check owner permissions")
                .long_about("Exit 0 if all requested owner permissions are set, 1 otherwise"),
            Command::new("chmod")
                .about("Set owner permissions")
                .long_about("Set permissions to exactly the given owner bits"),
            Command::new("mkdir").about("Create a directory"),
            Command::new("touch").about("Create an empty file"),
            Command::new("rm").about("Remove an entry"),
            Command::new("cp").about("Copy a file or directory"),
            Command::new("mv").about("Move or rename an entry"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(std::io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("fspath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
