pub mod models;
pub mod search;

// Re-exports
pub use models::*;

use axum::{Json, Router, extract::State, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Health handler (simple, keep here)
pub async fn health_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        solr_url: state.solr.url().to_string(),
    })
}

/// Full router with CORS open to every origin
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(search::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
