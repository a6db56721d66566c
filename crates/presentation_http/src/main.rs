//! Vocalpress HTTP Server
//!
//! Main entry point for the page server.

use std::{sync::Arc, time::Duration};

use application::PostPageService;
use infrastructure::{AppConfig, PostCatalogAdapter, SpeechAdapter};
use presentation_http::{PageRenderer, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can honour it
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vocalpress_server=debug,tower_http=debug".into());
    if config.server.log_format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    info!("Vocalpress v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        posts_backend = %config.posts.base_url,
        speech_backend = %config.speech.base_url,
        "Configuration loaded"
    );

    // Initialize upstream adapters
    let posts_adapter = PostCatalogAdapter::with_config(config.posts.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize post catalog client: {e}"))?;
    let speech_adapter = SpeechAdapter::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech client: {e}"))?;

    // Initialize services
    let page_service = PostPageService::new(Arc::new(posts_adapter), Arc::new(speech_adapter));

    let renderer =
        PageRenderer::new().map_err(|e| anyhow::anyhow!("Failed to load templates: {e}"))?;

    let state = AppState {
        page_service: Arc::new(page_service),
        renderer: Arc::new(renderer),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if !config.server.cors_enabled {
        CorsLayer::new()
    } else if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // Connection draining is handled by axum's graceful_shutdown
}
