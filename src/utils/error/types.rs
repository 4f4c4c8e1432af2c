//! Error types for the validator

use crate::core::vat::FormatError;
use thiserror::Error;

/// Result type alias for the validator
pub type Result<T> = std::result::Result<T, ViesError>;

/// Main error type for the validator
#[derive(Error, Debug)]
pub enum ViesError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input list errors (missing or unreadable file)
    #[error("Input error: {0}")]
    Input(String),

    /// Result sink errors
    #[error("Output error: {0}")]
    Output(String),

    /// Malformed identifier
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
