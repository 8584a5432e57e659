//! Database layer - the connection pool
//!
//! - One `PgPool` per process, owned by `AppState` - no global handle
//! - Pool limits live in `pool::PoolSettings`
//! - Reachability is checked once at startup and again per health request

pub mod pool;

pub use pool::{create_pool, create_pool_with_settings, ping, ConnectionError, PoolSettings};
