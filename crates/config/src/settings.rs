//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{assets, endpoints, extraction, timeouts};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Model backends
    #[serde(default)]
    pub models: ModelConfig,

    /// Lexicon and catalog locations
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Extraction heuristics
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_models()?;
        self.validate_extraction()?;
        self.validate_assets()?;

        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        let server = &self.server;

        if server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.environment.is_production() && server.cors_enabled && server.cors_origins.is_empty()
        {
            tracing::warn!(
                "CORS is enabled in production but no origins are configured. \
                 This may block legitimate requests."
            );
        }

        Ok(())
    }

    fn validate_models(&self) -> Result<(), ConfigError> {
        let models = &self.models;

        if models.provider == ModelProvider::Http {
            if models.endpoint.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "models.endpoint".to_string(),
                    message: "Endpoint is required when provider is http".to_string(),
                });
            }

            if models.request_timeout_ms == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "models.request_timeout_ms".to_string(),
                    message: "Must be at least 1".to_string(),
                });
            }
        } else if self.environment.is_strict() {
            tracing::warn!(
                "Model provider is disabled in {:?}; extraction will fall back to lexicons only",
                self.environment
            );
        }

        Ok(())
    }

    fn validate_extraction(&self) -> Result<(), ConfigError> {
        if self.extraction.song_context_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extraction.song_context_window".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Missing asset files are fatal in staging/production, warnings otherwise
    fn validate_assets(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();

        for (field, path) in self.assets.all_paths() {
            if !path.is_file() {
                if self.environment.is_strict() {
                    missing.push(format!("{}: file not found: {}", field, path.display()));
                } else {
                    tracing::warn!("Asset not found: {} = {}", field, path.display());
                }
            }
        }

        if !missing.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "assets".to_string(),
                message: format!("Asset validation failed:\n  - {}", missing.join("\n  - ")),
            });
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    endpoints::SERVER_PORT_DEFAULT
}

fn default_timeout() -> u64 {
    timeouts::REQUEST_SECONDS
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Which model backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    /// Model sidecar over HTTP
    #[default]
    Http,
    /// No models; recognizers and QA return nothing
    Disabled,
}

/// Model backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub provider: ModelProvider,

    /// Base URL of the model sidecar
    #[serde(default = "default_model_endpoint")]
    pub endpoint: String,

    /// Timeout for a single model call in milliseconds
    #[serde(default = "default_model_timeout")]
    pub request_timeout_ms: u64,
}

fn default_model_endpoint() -> String {
    endpoints::MODEL_SIDECAR_DEFAULT.to_string()
}

fn default_model_timeout() -> u64 {
    timeouts::MODEL_REQUEST_MS
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: ModelProvider::Http,
            endpoint: default_model_endpoint(),
            request_timeout_ms: default_model_timeout(),
        }
    }
}

/// Lexicon list and catalog locations
///
/// File names are resolved relative to `dir`; absolute names are used as is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_genres")]
    pub genres: String,

    #[serde(default = "default_titles")]
    pub titles: String,

    #[serde(default = "default_actors")]
    pub actors: String,

    #[serde(default = "default_directors")]
    pub directors: String,

    #[serde(default = "default_catalog")]
    pub catalog: String,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(assets::DIR)
}
fn default_genres() -> String {
    assets::GENRES.to_string()
}
fn default_titles() -> String {
    assets::TITLES.to_string()
}
fn default_actors() -> String {
    assets::ACTORS.to_string()
}
fn default_directors() -> String {
    assets::DIRECTORS.to_string()
}
fn default_catalog() -> String {
    assets::CATALOG.to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            genres: default_genres(),
            titles: default_titles(),
            actors: default_actors(),
            directors: default_directors(),
            catalog: default_catalog(),
        }
    }
}

impl AssetsConfig {
    /// Assets rooted at `dir` with the default file names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Resolve a configured file name against the assets directory
    pub fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }

    pub fn genres_path(&self) -> PathBuf {
        self.resolve(&self.genres)
    }

    pub fn titles_path(&self) -> PathBuf {
        self.resolve(&self.titles)
    }

    pub fn actors_path(&self) -> PathBuf {
        self.resolve(&self.actors)
    }

    pub fn directors_path(&self) -> PathBuf {
        self.resolve(&self.directors)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve(&self.catalog)
    }

    fn all_paths(&self) -> [(&'static str, PathBuf); 5] {
        [
            ("assets.genres", self.genres_path()),
            ("assets.titles", self.titles_path()),
            ("assets.actors", self.actors_path()),
            ("assets.directors", self.directors_path()),
            ("assets.catalog", self.catalog_path()),
        ]
    }
}

/// Extraction heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Tokens inspected on each side of a song mention when deciding whether
    /// a character is the song's performer
    #[serde(default = "default_song_context_window")]
    pub song_context_window: usize,

    /// Tokens inspected on each side of a cardinal for the word "give"
    #[serde(default = "default_rate_avg_give_window")]
    pub rate_avg_give_window: usize,
}

fn default_song_context_window() -> usize {
    extraction::SONG_CONTEXT_WINDOW
}

fn default_rate_avg_give_window() -> usize {
    extraction::RATE_AVG_GIVE_WINDOW
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            song_context_window: default_song_context_window(),
            rate_avg_give_window: default_rate_avg_give_window(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from `config/` and the environment
///
/// Priority: env vars (`MOVIE_NER__SECTION__KEY`) > config/{env} > config/default > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings from an explicit config directory
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_file = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_file.to_string_lossy()).required(false));

    if let Some(env_name) = env {
        let env_file = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_file.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("MOVIE_NER")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.models.provider, ModelProvider::Http);
        assert_eq!(settings.extraction.song_context_window, 8);
        assert_eq!(settings.assets.catalog_path(), PathBuf::from("assets/movies.csv"));
    }

    #[test]
    fn test_server_validation() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate_server().is_err());

        settings.server.port = 9000;
        settings.server.timeout_seconds = 0;
        assert!(settings.validate_server().is_err());

        settings.server.timeout_seconds = 10;
        assert!(settings.validate_server().is_ok());
    }

    #[test]
    fn test_model_validation() {
        let mut settings = Settings::default();
        settings.models.endpoint = "  ".to_string();
        assert!(settings.validate_models().is_err());

        // Endpoint is irrelevant once the models are disabled
        settings.models.provider = ModelProvider::Disabled;
        assert!(settings.validate_models().is_ok());
    }

    #[test]
    fn test_extraction_validation() {
        let mut settings = Settings::default();
        settings.extraction.song_context_window = 0;
        assert!(settings.validate_extraction().is_err());
    }

    #[test]
    fn test_missing_assets_strict() {
        let mut settings = Settings::default();
        settings.assets = AssetsConfig::in_dir("/nonexistent/assets");

        // Development only warns
        assert!(settings.validate_assets().is_ok());

        settings.environment = RuntimeEnvironment::Production;
        assert!(settings.validate_assets().is_err());
    }

    #[test]
    fn test_resolve_absolute_asset() {
        let mut assets = AssetsConfig::in_dir("assets");
        assets.catalog = "/data/movies.csv".to_string();
        assert_eq!(assets.catalog_path(), PathBuf::from("/data/movies.csv"));
        assert_eq!(assets.genres_path(), PathBuf::from("assets/genres.list"));
    }

    #[test]
    fn test_load_settings_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "server:\n  port: 9100\nmodels:\n  provider: disabled\nextraction:\n  song_context_window: 4\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.yaml"),
            "server:\n  timeout_seconds: 5\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), Some("staging")).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.timeout_seconds, 5);
        assert_eq!(settings.models.provider, ModelProvider::Disabled);
        assert_eq!(settings.extraction.song_context_window, 4);
        // Untouched sections keep their defaults
        assert_eq!(settings.extraction.rate_avg_give_window, 5);
    }
}
