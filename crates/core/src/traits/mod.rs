//! Consumed model interfaces
//!
//! The extraction pipeline treats every model as a black box behind one of
//! these traits, so backends can be swapped (HTTP sidecar, disabled, test
//! mocks) without touching the pipeline.
//!
//! ```text
//! Recognition:
//!   - GeneralRecognizer: text → (span, label) pairs (PERSON, CARDINAL, ...)
//!   - DomainTagger: text → one BIO label per whitespace token
//!
//! Disambiguation:
//!   - QuestionAnswerer: (question, context) → answer or none
//! ```

mod question_answering;
mod recognizer;

pub use question_answering::QuestionAnswerer;
pub use recognizer::{general_labels, DomainTagger, GeneralRecognizer, RecognizedSpan};
