//! Route handlers, mounted under `/api`

pub mod health;
pub mod hello;

use axum::Router;

use crate::state::AppState;

/// All `/api` routes
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(hello::router())
}
