//! Runtime configuration.
//!
//! The resolver needs two settings: how chatty to be on stderr and which
//! directory relative inputs are resolved against. Both come from the
//! environment and can be overridden programmatically (the CLI maps its flags
//! onto overrides).
//!
//! # Configuration Precedence
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`RESOLVE_OSX_ALIAS_*`, `PWD`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use osx_alias::config::{Config, ConfigBuilder};
//! use osx_alias::LogLevel;
//! use std::path::PathBuf;
//!
//! let config = ConfigBuilder::new()
//!     .skip_env()
//!     .with_config(Config {
//!         log_mode: Some(LogLevel::Verbose),
//!         working_directory: Some(PathBuf::from("/Users/x")),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.log_level(), LogLevel::Verbose);
//! assert_eq!(config.working_directory().unwrap(), PathBuf::from("/Users/x"));
//! ```

pub mod builder;
pub mod environment;

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LogLevel;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;

/// Configuration values. Unset fields fall back to defaults when read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Explicit log level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_mode: Option<LogLevel>,

    /// Emit diagnostic records; implies verbose logging when true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Directory relative inputs are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<PathBuf>,
}

impl Config {
    /// Effective log level: `debug` wins, then `log_mode`, then Normal.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        if self.debug == Some(true) {
            return LogLevel::Verbose;
        }
        self.log_mode.unwrap_or(LogLevel::Normal)
    }

    /// Effective working directory.
    ///
    /// Uses the configured directory when it is absolute, otherwise the
    /// process working directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the process working directory is needed and
    /// cannot be determined.
    pub fn working_directory(&self) -> Result<PathBuf> {
        match &self.working_directory {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            _ => Ok(env::current_dir()?),
        }
    }

    /// Overwrite fields with the ones set in `other`.
    pub fn merge_from(&mut self, other: &Config) {
        if other.log_mode.is_some() {
            self.log_mode = other.log_mode;
        }
        if other.debug.is_some() {
            self.debug = other.debug;
        }
        if other.working_directory.is_some() {
            self.working_directory.clone_from(&other.working_directory);
        }
    }
}
