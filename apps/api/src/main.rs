mod config;
mod errors;
mod finance;
mod generation;
mod llm_client;
mod response;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::service::GatewayService;
use crate::llm_client::{GeminiClient, LanguageModel};
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast when GOOGLE_API_KEY is missing)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{target}={level},tower_http={level}",
                target = env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Idea Forge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model client once; every request shares this handle
    let llm = GeminiClient::new(
        config.google_api_key.clone(),
        config.gemini_model.clone(),
        &config.gemini_api_base,
    )?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm.name(),
        config.model_timeout_secs
    );

    let state = AppState {
        gateway: GatewayService::new(
            Arc::new(llm),
            Duration::from_secs(config.model_timeout_secs),
        ),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origin)?);
    info!("CORS origin: {}", config.cors_origin);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
