//! Extractive question answering trait

use crate::Result;

/// Extractive QA model
///
/// Used to settle actor-vs-director ambiguity when the static lists are
/// inconclusive.
pub trait QuestionAnswerer: Send + Sync {
    /// Answer `question` from `context`
    ///
    /// `Ok(None)` and `Ok(Some(""))` both mean the model found no answer.
    fn answer(&self, question: &str, context: &str) -> Result<Option<String>>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
