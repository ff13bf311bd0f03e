mod catalog;
mod config;
mod errors;
mod gpa;
mod llm_client;
mod models;
mod questionnaire;
mod recommend;
mod requirements;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommend::evaluator::{ClaudeEvaluator, CourseEvaluator, RuleBasedEvaluator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values, not on a missing key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Course Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Evaluator backend: Claude when a key is configured, rule-based otherwise.
    // The Claude path degrades to rule-based on its own when a call fails.
    let evaluator: Arc<dyn CourseEvaluator> = match &config.anthropic_api_key {
        Some(key) => {
            info!("Claude evaluator enabled (model: {})", llm_client::MODEL);
            Arc::new(ClaudeEvaluator::new(LlmClient::new(key.clone())))
        }
        None => {
            info!("No Anthropic API key configured; using rule-based evaluator");
            Arc::new(RuleBasedEvaluator)
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        evaluator,
        sessions: SessionStore::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
