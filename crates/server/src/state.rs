//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use movie_ner_config::Settings;
use movie_ner_extraction::MovieEntityExtractor;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub extractor: Arc<MovieEntityExtractor>,
}

impl AppState {
    pub fn new(config: Settings, extractor: MovieEntityExtractor) -> Self {
        Self {
            config: Arc::new(config),
            extractor: Arc::new(extractor),
        }
    }
}
