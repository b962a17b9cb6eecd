//! Named entity recognizer traits

use serde::{Deserialize, Serialize};

use crate::{Result, TaggedToken};

/// Labels of the general-purpose recognizer that the pipeline reads
pub mod general_labels {
    pub const PERSON: &str = "PERSON";
    pub const CARDINAL: &str = "CARDINAL";
}

/// A span produced by the general-purpose recognizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedSpan {
    /// Surface text of the span
    pub text: String,
    /// Recognizer tag (e.g. `PERSON`, `CARDINAL`, `DATE`)
    pub label: String,
}

impl RecognizedSpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.label == label
    }
}

/// General-purpose span recognizer
///
/// Implementations:
/// - `HttpModelClient` - model sidecar over HTTP
/// - `NoopRecognizer` - disabled, yields nothing
pub trait GeneralRecognizer: Send + Sync {
    /// Recognize entity spans in `text`
    ///
    /// An empty vector means "no information"; errors are model failures.
    fn recognize(&self, text: &str) -> Result<Vec<RecognizedSpan>>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Domain-tuned token tagger
///
/// Produces one label per whitespace token, drawn from
/// {`O`, `B-PER`, `I-PER`, `B-MISC`, `I-MISC`}.
pub trait DomainTagger: Send + Sync {
    /// Tag every whitespace token of `text`
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
