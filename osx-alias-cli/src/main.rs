//! Main entry point for resolve-osx-alias.
//!
//! Prints the absolute path an alias points to, or the normalized path
//! itself when it is not an alias.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::{CompletionsCommand, ResolveCommand};
use osx_alias::Logger;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; usage errors exit with status 2
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    if let Some(shell) = cli.completions {
        let result = CompletionsCommand { shell }.execute();
        finish(global.fallback_logger(), result);
    }

    let (logger, result) = match utils::load_configuration(&global) {
        Ok(config) => {
            let logger = Logger::new(config.log_level());
            let command = ResolveCommand { path: cli.path };
            (logger, command.execute(&config, logger))
        }
        Err(e) => (global.fallback_logger(), Err(e)),
    };

    finish(logger, result);
}

/// Report the outcome and set the exit code.
fn finish(logger: Logger, result: Result<(), error::CliError>) -> ! {
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
