mod api;
mod config;
mod error;
mod frontend;
mod models;
mod services;

use crate::api::AppState;
use crate::config::Config;
use crate::services::HuggingFaceClassifier;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sonify=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let classifier = Arc::new(HuggingFaceClassifier::from_config(&config)?);
    tracing::info!(
        "Sentiment classifier: {} (timeout {:?})",
        config.sentiment_api_url,
        config.sentiment_timeout
    );

    let shutdown = CancellationToken::new();
    let app_state = Arc::new(AppState {
        classifier,
        shutdown: shutdown.clone(),
    });

    let app = api::router(app_state)
        // Chat page - catch-all route (must be last)
        .fallback(get(frontend::serve_frontend))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config)?);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Sonify running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| HeaderValue::from_str(o))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Resolves on Ctrl-C or SIGTERM and cancels outstanding classifier calls.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
    shutdown.cancel();
}
