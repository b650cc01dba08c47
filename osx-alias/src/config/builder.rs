//! Builder that assembles a [`Config`] from its sources.

use crate::config::{Config, EnvironmentConfig};
use crate::error::Result;

/// Builds configuration from the environment and programmatic overrides.
///
/// # Examples
///
/// ```no_run
/// use osx_alias::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// println!("log level: {}", config.log_level());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer programmatic overrides on top of the environment. Later calls
    /// take precedence over earlier ones.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Assemble the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();
        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }
        for overrides in &self.overrides {
            config.merge_from(overrides);
        }
        Ok(config)
    }
}
