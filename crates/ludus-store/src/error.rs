//! Error types for the store

use thiserror::Error;

/// Errors that can occur while building, saving or loading a dictionary
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error on the artifact file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record source failed
    #[error("Record source error: {0}")]
    Source(String),

    /// The artifact decoded but its contents are inconsistent
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),
}
