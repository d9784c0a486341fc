use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use myimpact_api::config::Config;
use myimpact_api::goals::generator::{GoalGenerator, LlmGoalGenerator};
use myimpact_api::llm_client::{self, LlmClient};
use myimpact_api::routes::build_router;
use myimpact_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MyImpact API v{}", env!("CARGO_PKG_VERSION"));
    info!("Resource root: {}", config.resource_root.display());

    // Initialize goal generator (prompts-only when no API key is configured)
    let generator: Option<Arc<dyn GoalGenerator>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmGoalGenerator(llm)))
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; serving prompts only");
            None
        }
    };

    let state = AppState::new(config.clone(), generator);

    // Catalog problems are reported, not fatal: discovery still serves what loads.
    let engine = state.engine.clone();
    match tokio::task::spawn_blocking(move || engine.verify_catalog()).await? {
        Ok(report) => info!(
            "Catalog: {} scales, {} attributes, {} organizations",
            report.scales.len(),
            report.attributes.len(),
            report.organizations.len()
        ),
        Err(e) => warn!("Catalog verification failed: {e}"),
    }

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        // TODO: restrict CORS to the deployed web app origins once they are configurable.
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
