//! Environment variable handling for configuration overrides.

use std::env;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Log level override: quiet, normal or verbose.
pub const LOG_MODE_VAR: &str = "RESOLVE_OSX_ALIAS_LOG_MODE";

/// Boolean switch for diagnostic records.
pub const DEBUG_VAR: &str = "RESOLVE_OSX_ALIAS_DEBUG";

/// Working directory maintained by the shell.
pub const PWD_VAR: &str = "PWD";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use osx_alias::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// An unrecognized log mode is ignored; a relative or empty `PWD` is
    /// ignored so the process working directory is used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if `RESOLVE_OSX_ALIAS_DEBUG` is not a boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(mode) = env::var(LOG_MODE_VAR) {
            match LogLevel::parse(&mode) {
                Ok(level) => config.log_mode = Some(level),
                Err(e) => log::debug!("ignoring {LOG_MODE_VAR}: {e}"),
            }
        }

        if let Ok(val) = env::var(DEBUG_VAR) {
            config.debug = Some(Self::parse_bool(DEBUG_VAR, &val)?);
        }

        if let Some(pwd) = env::var_os(PWD_VAR) {
            let pwd = PathBuf::from(pwd);
            if pwd.is_absolute() {
                config.working_directory = Some(pwd);
            }
        }

        Ok(())
    }

    /// Parse a boolean value from an environment variable.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" | "" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
