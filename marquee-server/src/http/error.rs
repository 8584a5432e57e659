//! Request-time errors with IntoResponse
//!
//! A failed probe never takes the process down; it becomes a JSON 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::ConnectionError;

/// Body message when the database could not be reached or pinged.
pub const PING_FAILED_MESSAGE: &str = "Database ping failed";

/// Errors raised while serving a request.
#[derive(Debug)]
pub enum RequestError {
    /// Dialing, acquiring or pinging a connection failed (500)
    ///
    /// A closed pool, a refused port and a dropped handshake all land here,
    /// same as a failed round-trip on a live connection.
    Ping(ConnectionError),
}

impl From<ConnectionError> for RequestError {
    fn from(e: ConnectionError) -> Self {
        Self::Ping(e)
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let Self::Ping(e) = &self;
        // Log the actual error, return the fixed message
        tracing::warn!(error = %e, "health check ping failed");

        let body = json!({
            "status": "error",
            "message": PING_FAILED_MESSAGE
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
