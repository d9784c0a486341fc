pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::goals::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/metadata", get(handlers::handle_metadata))
        .route(
            "/api/orgs/:org/focus-areas",
            get(handlers::handle_focus_areas),
        )
        .route("/api/goals/generate", post(handlers::handle_generate))
        .with_state(state)
}
