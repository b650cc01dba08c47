//! Shell completion generation.
//!
//! Completions for bash, zsh, fish, PowerShell and elvish come from
//! `clap_complete`; the script goes to stdout and install hints to stderr.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;

/// Name of the installed binary.
const BIN_NAME: &str = "resolve-osx-alias";

/// Generate a shell completion script.
pub struct CompletionsCommand {
    /// Shell to generate completions for.
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => eprintln!(
                "#   {BIN_NAME} --completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"
            ),
            Shell::Zsh => eprintln!("#   {BIN_NAME} --completions zsh > ~/.zsh/completions/_{BIN_NAME}"),
            Shell::Fish => eprintln!(
                "#   {BIN_NAME} --completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
            ),
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
