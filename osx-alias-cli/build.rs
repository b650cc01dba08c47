//! Build script for osx-alias-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! The command structure is rebuilt here because a build script cannot depend
//! on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("resolve-osx-alias")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve a macOS Finder alias to the path of its original item")
        .long_about(
            "Resolve a macOS Finder alias to the path of its original item.\n\n\
             Paths that are not aliases, or do not exist, are printed in normalized \
             absolute form. Directories end with a slash.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .visible_alias("debug")
                .help("Print diagnostic records to stderr as `DEBUG: {json}` lines")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress error messages")
                .conflicts_with("verbose")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script and exit")
                .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
        )
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Path to resolve (defaults to the current directory)"),
        )
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("resolve-osx-alias.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
