//! Configuration management for movie query entity extraction
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, `config/{env}`)
//! - Environment variables (MOVIE_NER_ prefix, `__` separator)
//!
//! and loading the static assets the extractor reads:
//! - genres.list, titles.list, actors.list, directors.list
//! - movies.csv (the reference catalog)

pub mod assets;
pub mod constants;
pub mod settings;

pub use assets::{load_assets, load_catalog, load_lexicons, Assets};
pub use settings::{
    load_settings, load_settings_from, AssetsConfig, ExtractionConfig, ModelConfig, ModelProvider,
    ObservabilityConfig, RuntimeEnvironment, ServerConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Asset error: {0}")]
    Asset(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<csv::Error> for ConfigError {
    fn from(err: csv::Error) -> Self {
        ConfigError::Asset(err.to_string())
    }
}
