//! Error types for the Sculk platform integration

pub use spark_shared::UnsupportedLevel;

/// Lifecycle errors of the platform plugin
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// `on_initialize` ran twice without a shutdown in between
    #[error("spark is already enabled on this server")]
    AlreadyEnabled,

    /// `on_shutdown` ran before `on_initialize`
    #[error("spark is not enabled on this server")]
    NotEnabled,
}

/// Configuration parsing and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed
    #[error("failed to parse spark configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The command keyword cannot be registered
    #[error("invalid command name {0:?} (must be non-empty, without spaces or a leading '/')")]
    InvalidCommandName(String),
}
