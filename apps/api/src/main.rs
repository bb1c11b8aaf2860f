mod analysis;
mod config;
mod errors;
mod llm_client;
mod pdf;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration is read once; everything downstream shares it read-only
    let config = Arc::new(Config::from_env()?);

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting {} v{}", config.app_name, env!("CARGO_PKG_VERSION"));

    if config.api_key().is_none() {
        warn!("OPENROUTER_API_KEY is not set; resume checks will fail until it is configured");
    }

    let llm = LlmClient::new(&config)?;
    info!(
        model = %config.openrouter_model,
        base_url = %config.openrouter_base_url,
        timeout_secs = config.request_timeout.as_secs_f64(),
        "LLM client initialized"
    );

    let state = AppState {
        analyzer: ResumeAnalyzer::new(config.clone(), Arc::new(llm)),
        config: config.clone(),
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
