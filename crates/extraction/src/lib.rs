//! Movie query entity extraction
//!
//! Features:
//! - Lexicon and regex matchers for genres, ratings, years, awards, songs,
//!   trailers, titles and average ratings
//! - Person collection and actor/director/character classification, with
//!   question answering for ambiguous names
//! - Catalog reconciliation with transactional filtering and single-row
//!   re-derivation
//! - BIO lowering of the typed candidates onto the query tokens

pub mod candidates;
pub mod disambiguation;
pub mod error;
pub mod lexicon;
pub mod merge;
pub mod persons;
pub mod pipeline;
pub mod recognizers;
pub mod reconcile;
pub mod text;
pub mod vocabulary;

pub use candidates::{EntityCandidates, TypedSpan};
pub use disambiguation::Disambiguator;
pub use error::{ExtractionError, Result};
pub use persons::PersonRole;
pub use pipeline::{Analysis, Extraction, MovieEntityExtractor};
pub use recognizers::{create_models, HttpModelClient, Models, NoopQuestionAnswerer, NoopRecognizer};
pub use reconcile::{CandidateSet, CatalogReconciler, Reconciliation};
