//! The resolve action.

use osx_alias::{AliasResolver, Config, Logger};

use crate::error::CliError;

/// Resolve one path and print the result on stdout.
pub struct ResolveCommand {
    /// Path to resolve; the working directory when absent.
    pub path: Option<String>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    ///
    /// Diagnostic records go to `logger`, which prints them only at verbose
    /// level.
    pub fn execute(&self, config: &Config, logger: Logger) -> Result<(), CliError> {
        let working_directory = config.working_directory()?;
        let resolver = AliasResolver::new(working_directory).with_diagnostics(Box::new(logger));

        let resolved = resolver.resolve(self.path.as_deref())?;
        println!("{resolved}");
        Ok(())
    }
}
