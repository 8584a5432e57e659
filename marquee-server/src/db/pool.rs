//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit limits. The pool is checked with a ping
//! before the server starts so a bad DSN fails at startup, not on the
//! first request.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};
use thiserror::Error;

use crate::config::DatabaseUrl;

/// Idle connections the service means to keep. sqlx has no idle ceiling,
/// see [`PoolSettings::pool_options`] for how this is approximated.
pub const MAX_IDLE_CONNECTIONS: u32 = 2;

/// Hard cap on open connections.
pub const MAX_OPEN_CONNECTIONS: u32 = 10;

/// Connections older than this are closed and replaced.
pub const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// How long a caller waits for a free connection. Same as the sqlx default.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Idle connections beyond the floor are closed after this long.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to ping database: {0}")]
    Ping(#[source] sqlx::Error),
}

/// Pool limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_idle: u32,
    pub max_open: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_idle: MAX_IDLE_CONNECTIONS,
            max_open: MAX_OPEN_CONNECTIONS,
            max_lifetime: MAX_CONNECTION_LIFETIME,
            idle_timeout: IDLE_TIMEOUT,
            acquire_timeout: ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolSettings {
    /// sqlx options carrying these limits.
    ///
    /// The idle cap is approximated: sqlx can only bound idle connections
    /// from below, so nothing is opened up front (`min_connections(0)`) and
    /// idle connections are reaped after `idle_timeout`. After a burst the
    /// pool may briefly hold more than `max_idle` idle connections.
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_open)
            .min_connections(0)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Create a PostgreSQL connection pool with the default limits and verify
/// it with a ping.
///
/// # Errors
///
/// Returns [`ConnectionError`] if the connection or the ping fails.
///
/// # Example
///
/// ```ignore
/// let config = Config::load(Path::new("../.env"))?;
/// let pool = create_pool(&config.database_url).await?;
/// ```
pub async fn create_pool(database_url: &DatabaseUrl) -> Result<PgPool, ConnectionError> {
    create_pool_with_settings(database_url, PoolSettings::default()).await
}

/// Create a PostgreSQL connection pool with custom limits.
pub async fn create_pool_with_settings(
    database_url: &DatabaseUrl,
    settings: PoolSettings,
) -> Result<PgPool, ConnectionError> {
    let pool = settings
        .pool_options()
        .connect(database_url.expose())
        .await
        .map_err(ConnectionError::Connect)?;

    ping(&pool).await?;

    tracing::info!(
        database = %database_url,
        max_idle = settings.max_idle,
        max_open = settings.max_open,
        max_lifetime_secs = settings.max_lifetime.as_secs(),
        idle_timeout_secs = settings.idle_timeout.as_secs(),
        "Successfully connected to the database"
    );

    Ok(pool)
}

/// Acquire one connection and round-trip a ping on it.
pub async fn ping(pool: &PgPool) -> Result<(), ConnectionError> {
    let mut conn = pool.acquire().await.map_err(ConnectionError::Connect)?;
    conn.ping().await.map_err(ConnectionError::Ping)
}
