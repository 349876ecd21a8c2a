// File: src/error.rs

/// Result type alias using [`SpellError`].
pub type Result<T> = std::result::Result<T, SpellError>;

/// Errors surfaced by the spelling engine.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// Malformed caller input, e.g. an empty term passed to `ingest`.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration values outside the supported range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure while reading a corpus.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpellError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        SpellError::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        SpellError::Config(msg.into())
    }
}
