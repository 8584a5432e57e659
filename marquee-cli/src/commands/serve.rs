//! HTTP server command
//!
//! Loads configuration, opens the database pool and serves the API on the
//! fixed port until Ctrl+C or SIGTERM.

use std::path::Path;

use anyhow::{Context, Result};

use marquee_server::{create_pool, run_server, Config, ServerConfig};

/// Run the HTTP server
pub async fn run_serve(env_file: &Path) -> Result<()> {
    // Nothing binds until configuration and the first ping succeed
    let config = Config::load(env_file).context("Failed to load configuration")?;

    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    run_server(pool, ServerConfig::default())
        .await
        .context("Failed to start server")?;

    Ok(())
}
