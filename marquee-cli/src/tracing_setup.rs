//! Tracing setup for the marquee binary
//!
//! Usage:
//!   marquee --debug serve              # Debug logging to console
//!   marquee --log-format json serve    # JSON lines, one event per line
//!   RUST_LOG=marquee_server=debug ...  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                           # Log filter (default: info)

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Console output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    pub format: LogFormat,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let default_level = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }
}

/// Initialize the global subscriber. Fails if one is already installed.
pub fn init(config: &TracingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow!(err))
}
