//! Core traits and types for movie query entity extraction
//!
//! This crate provides the foundational types used across the workspace:
//! - BIO labels and entity kinds
//! - The reference movie catalog and the static lexicons
//! - Traits for the consumed models (recognizers, question answering)
//! - Error types

pub mod catalog;
pub mod error;
pub mod label;
pub mod lexicon;
pub mod traits;

pub use catalog::{Catalog, CatalogRecord};
pub use error::{Error, Result};
pub use label::{EntityKind, Label, TaggedToken};
pub use lexicon::Lexicons;

pub use traits::{general_labels, DomainTagger, GeneralRecognizer, QuestionAnswerer, RecognizedSpan};
