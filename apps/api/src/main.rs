mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod optimizer;
mod routes;
mod security;
mod state;

use anyhow::Result;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::Config;
use crate::llm_client::{ChatModel, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (reads .env if present)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Optimizer v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client. Without a key the optimize endpoint answers 500.
    let model: Option<Arc<dyn ChatModel>> = match &config.groq_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        None => {
            warn!("GROQ_API_KEY not set; /api/optimize/ will return 500");
            None
        }
    };

    std::fs::create_dir_all(&config.scratch_dir)?;
    info!(
        "Scratch dir: {}, static dir: {}",
        config.scratch_dir.display(),
        config.static_dir.display()
    );

    let state = AppState {
        config: config.clone(),
        model,
    };

    // Build router
    let app = security::apply(build_router(state), &config).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request| {
            info_span!(
                "request",
                id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri(),
            )
        }),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
