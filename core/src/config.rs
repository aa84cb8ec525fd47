//! Platform configuration
//!
//! The host owns its configuration files; it hands the `[spark]` section to
//! the plugin as text and the plugin only parses it. Every field has a
//! default, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};
use spark_shared::is_valid_command_name;

use crate::error::ConfigError;

/// Platform plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkConfig {
    /// Top-level command keyword (default: "spark")
    #[serde(default = "default_command_name")]
    pub command_name: String,
    /// Platform name reported to the engine (default: "Sculk")
    #[serde(default = "default_platform_name")]
    pub platform_name: String,
    /// Display name of the server console (default: "Console")
    #[serde(default = "default_console_name")]
    pub console_name: String,
}

fn default_command_name() -> String {
    "spark".to_string()
}
fn default_platform_name() -> String {
    "Sculk".to_string()
}
fn default_console_name() -> String {
    "Console".to_string()
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            command_name: default_command_name(),
            platform_name: default_platform_name(),
            console_name: default_console_name(),
        }
    }
}

impl SparkConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or the command
    /// name cannot be registered.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SparkConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can be applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_command_name(&self.command_name) {
            return Err(ConfigError::InvalidCommandName(self.command_name.clone()));
        }
        Ok(())
    }
}
