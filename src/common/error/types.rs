//! Unified error types for sheetdeck.
use thiserror::Error;

/// Main error type for sheetdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Builder style could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Content could not be interpreted as a content mapping
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// A section holds a value the builder cannot render
    #[error("Unsupported content in section '{section}': {shape}")]
    UnsupportedContent { section: String, shape: String },

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The injected completion client failed
    #[error("Completion error: {0}")]
    Completion(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for sheetdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
