//! Utility functions for CLI operations.

use osx_alias::{Config, ConfigBuilder, LogLevel, Logger};

use crate::error::CliError;

/// Global CLI options.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalOptions {
    /// Print diagnostic records.
    pub verbose: bool,

    /// Suppress error messages.
    pub quiet: bool,
}

impl GlobalOptions {
    /// Config overrides carried by the flags. Unset flags leave the
    /// environment in charge.
    pub fn overrides(&self) -> Config {
        let log_mode = if self.verbose {
            Some(LogLevel::Verbose)
        } else if self.quiet {
            Some(LogLevel::Quiet)
        } else {
            None
        };
        Config {
            log_mode,
            debug: log_mode.map(|level| level == LogLevel::Verbose),
            ..Config::default()
        }
    }

    /// Logger to use when no configuration could be loaded.
    pub fn fallback_logger(&self) -> Logger {
        Logger::new(if self.quiet {
            LogLevel::Quiet
        } else {
            LogLevel::Normal
        })
    }
}

/// Load configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_config(global.overrides())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
