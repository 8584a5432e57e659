//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown, then pool close
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::RequestError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
