//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur while configuring the gatekeeper
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be parsed
    #[error("Failed to parse filter configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize filter configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
