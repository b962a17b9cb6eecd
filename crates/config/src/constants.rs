//! Centralized defaults for settings and assets
//!
//! Single source of truth for values that would otherwise be repeated
//! between the settings defaults, the config files and the tests.

/// Service endpoints
pub mod endpoints {
    /// Model sidecar serving the recognizers and the QA model
    pub const MODEL_SIDECAR_DEFAULT: &str = "http://localhost:8501";

    /// HTTP server port
    pub const SERVER_PORT_DEFAULT: u16 = 8080;
}

/// Timeouts
pub mod timeouts {
    /// Per-request budget for the HTTP service (seconds)
    pub const REQUEST_SECONDS: u64 = 30;

    /// Per-call budget for a single model request (milliseconds)
    pub const MODEL_REQUEST_MS: u64 = 5_000;
}

/// Asset file names, relative to the assets directory
pub mod assets {
    pub const DIR: &str = "assets";
    pub const GENRES: &str = "genres.list";
    pub const TITLES: &str = "titles.list";
    pub const ACTORS: &str = "actors.list";
    pub const DIRECTORS: &str = "directors.list";
    pub const CATALOG: &str = "movies.csv";
}

/// Extraction heuristics
pub mod extraction {
    /// Tokens inspected on each side of a song mention
    pub const SONG_CONTEXT_WINDOW: usize = 8;

    /// Tokens inspected on each side of a cardinal for the word "give"
    pub const RATE_AVG_GIVE_WINDOW: usize = 5;
}
