//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::ping;
use crate::http::error::RequestError;
use crate::state::AppState;

/// Body message for a reachable database.
pub const HEALTHY_MESSAGE: &str = "Database connection is healthy";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /api/health
///
/// Takes one connection from the pool (dialing if none is idle) and pings
/// it. The connection goes back to the pool when it drops.
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, RequestError> {
    ping(state.pool()).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        message: HEALTHY_MESSAGE,
    }))
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
