mod career;
mod config;
mod document;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod state;
mod study;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::CohereClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Saathi API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generation client
    let generator =
        CohereClient::new(&config.generation).context("Failed to build generation client")?;
    if config.generation.api_key.is_none() {
        warn!("COHERE_API_KEY is not set; generation requests will fail until it is configured");
    }
    info!(
        "Generation client initialized (endpoint: {})",
        config.generation.base_url
    );
    info!("PDF page separator: {:?}", config.page_separator);

    // Build app state
    let state = AppState {
        generator: Arc::new(generator),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
