//! marquee - database-backed health check service
//!
//! Entry point for the `marquee` binary:
//! - `serve`: run the HTTP API on port 8080
//! - `check`: validate configuration and database reachability, then exit

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use marquee_server::config::DEFAULT_ENV_FILE;

mod commands;
mod tracing_setup;

use tracing_setup::{LogFormat, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "marquee",
    author,
    version,
    about = "HTTP service reporting PostgreSQL reachability"
)]
struct Cli {
    /// Env file loaded before reading DATABASE_URL; must exist
    #[arg(long, global = true, env = "MARQUEE_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve /api/health and /api/hello on port 8080
    Serve,
    /// Load configuration, connect and ping the database, then exit
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        format: cli.log_format,
    });
    if let Err(err) = &logging {
        eprintln!("warning: failed to initialize logging: {err:#}");
    }

    let result = match cli.command {
        Commands::Serve => commands::run_serve(&cli.env_file).await,
        Commands::Check => commands::run_check(&cli.env_file).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Reported once: through tracing when it is up, stderr otherwise
            if logging.is_ok() {
                tracing::error!("{err:#}");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
