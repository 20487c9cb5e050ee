//! API implementation for the Firmdex HTTP server

use std::sync::Arc;

use axum::{
    Router,
    response::Json,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod companies;
pub mod dto;

/// Create the main router with all API endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/companies",
            post(companies::create_company).get(companies::search_companies),
        )
        .route("/api/companies/{id}", get(companies::get_company))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "version": firmdex::VERSION,
    }))
}
