//! CLI structure.
//!
//! The tool has no subcommands: one optional path argument plus a handful of
//! global flags.

use clap::Parser;
use clap_complete::Shell;

/// Print the path a macOS Finder alias points to.
#[derive(Parser)]
#[command(name = "resolve-osx-alias")]
#[command(
    version,
    about = "Resolve a macOS Finder alias to the path of its original item",
    long_about = "Resolve a macOS Finder alias to the path of its original item.\n\n\
                  Paths that are not aliases, or do not exist, are printed in \
                  normalized absolute form. Directories end with a slash."
)]
pub struct Cli {
    /// Print diagnostic records to stderr as `DEBUG: {json}` lines
    #[arg(short, long, visible_alias = "debug")]
    pub verbose: bool,

    /// Suppress error messages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Path to resolve (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}
