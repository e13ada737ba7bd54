/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// GET /health - Health check endpoint
///
/// Only checks that a pooled connection can be handed out.
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, state, database) = match app_state.db.pool().acquire().await {
        Ok(_conn) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!("Health check could not acquire a connection: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: state.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
        }),
    )
}
