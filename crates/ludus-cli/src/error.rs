//! Error types for the CLI application.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lexicon loading error
    #[error(transparent)]
    Extractor(#[from] ludus_extractor::ExtractorError),

    /// Build or artifact error
    #[error(transparent)]
    Store(#[from] ludus_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No dictionary artifact has been built yet
    #[error("No dictionary at {}. Run 'ludus build' first.", .0.display())]
    NoDictionary(PathBuf),

    /// Line editor failure
    #[error("Editor error: {0}")]
    Editor(String),
}
