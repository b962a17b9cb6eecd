//! Error types shared by the extraction crates

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A consumed model (recognizer or QA) failed
    #[error("Model error: {0}")]
    Model(String),

    /// A label string outside the `O` / `B-X` / `I-X` scheme
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Unusable input or configuration handed to a model backend
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a model error
    pub fn model(msg: impl Into<String>) -> Self {
        Error::Model(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
