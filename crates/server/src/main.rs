//! Movie NER Server Entry Point

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use movie_ner_config::{load_assets, load_settings, Settings};
use movie_ner_extraction::{create_models, MovieEntityExtractor};
use movie_ner_server::{create_router, init_metrics, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("MOVIE_NER_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!(
                "Loaded configuration from files (env: {})",
                env.as_deref().unwrap_or("default")
            );
            settings
        }
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!("Starting Movie NER Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    let _metrics_handle = init_metrics();
    tracing::info!("Initialized Prometheus metrics at /metrics");

    let assets = load_assets(&config.assets).map_err(|e| {
        tracing::error!(error = %e, dir = %config.assets.dir.display(), "Failed to load assets");
        e
    })?;
    tracing::info!(catalog_rows = assets.catalog.len(), "Assets loaded");

    // The blocking HTTP client must be built outside the async context
    let model_config = config.models.clone();
    let models = tokio::task::spawn_blocking(move || create_models(&model_config)).await??;

    let extractor = MovieEntityExtractor::from_assets(models, assets, config.extraction.clone());
    tracing::debug!(extractor = ?extractor, "Extractor ready");

    let state = AppState::new(config.clone(), extractor);
    let app = create_router(state);

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on SIGTERM/SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Initialize console tracing, JSON-formatted when configured
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("movie_ner={},tower_http=debug", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
