use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub timestamp: String,
}

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, provider) = if state.mailer.is_configured() {
        ("healthy", "configured")
    } else {
        ("degraded", "missing_key")
    };

    Json(HealthResponse {
        status: status.to_string(),
        provider: provider.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
