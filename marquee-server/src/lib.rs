//! marquee-server: database health check service
//!
//! Loads the connection string, opens a bounded PostgreSQL pool and serves
//! `GET /api/health` and `GET /api/hello`.

pub mod config;
pub mod db;
pub mod http;
pub mod state;

pub use config::{Config, ConfigError, DatabaseUrl};
pub use db::{create_pool, ConnectionError, PoolSettings};
pub use http::{build_router, run_server, RequestError, ServerConfig, ServerError};
pub use state::AppState;
