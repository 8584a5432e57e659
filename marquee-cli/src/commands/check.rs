//! Configuration check command
//!
//! Runs the same startup path as `serve` up to the first ping, then exits.

use std::path::Path;

use anyhow::{Context, Result};

use marquee_server::{create_pool, Config};

pub async fn run_check(env_file: &Path) -> Result<()> {
    let config = Config::load(env_file).context("Failed to load configuration")?;

    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    pool.close().await;

    println!("database reachable: {}", config.database_url);
    Ok(())
}
