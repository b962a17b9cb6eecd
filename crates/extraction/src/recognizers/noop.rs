//! Disabled model backends

use movie_ner_core::{
    DomainTagger, GeneralRecognizer, QuestionAnswerer, RecognizedSpan, Result, TaggedToken,
};

/// Recognizer and tagger that find nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl GeneralRecognizer for NoopRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<RecognizedSpan>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

impl DomainTagger for NoopRecognizer {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        Ok(text.split_whitespace().map(TaggedToken::outside).collect())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// QA model that never answers
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopQuestionAnswerer;

impl QuestionAnswerer for NoopQuestionAnswerer {
    fn answer(&self, _question: &str, _context: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn name(&self) -> &str {
        "noop"
    }
}
