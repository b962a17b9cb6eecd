//! Extraction errors

use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Extraction error
///
/// "Nothing found" is never an error; only model failures and pattern
/// construction failures surface here.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A consumed model (recognizer or QA) failed
    #[error(transparent)]
    Model(#[from] movie_ner_core::Error),

    /// A pattern built from catalog or lexicon values failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
