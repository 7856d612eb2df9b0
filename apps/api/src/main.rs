mod config;
mod errors;
mod fonts;
mod generation;
mod llm_client;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::fonts::{FontLoader, FontPreview, MetricsSurface};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Spark API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone(), &config.gemini_api_url)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Font loading shares one measurement surface for the lifetime of the process
    let surface = Arc::new(MetricsSurface::new());
    let loader = FontLoader::new(&config.fonts_css_url, surface.clone())?;
    let fonts = FontPreview::new(loader, surface, config.font_load_timeout);
    info!(
        "Font preview initialized ({}, timeout {:?})",
        config.fonts_css_url, config.font_load_timeout
    );

    let state = AppState {
        llm: Arc::new(llm),
        fonts,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
