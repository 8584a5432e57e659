//! Static greeting endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const GREETING: &str = "Hello from Go backend with database connection 👋";

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// GET /api/hello
async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { message: GREETING })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/hello", get(hello))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hello_returns_greeting() {
        let Json(body) = hello().await;
        assert_eq!(body.message, GREETING);
    }
}
