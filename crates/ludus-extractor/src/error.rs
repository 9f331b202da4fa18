//! Error types for the Extractor

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the lexicon
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The lexicon file does not exist
    #[error("Lexicon file not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// I/O error while reading the lexicon
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
