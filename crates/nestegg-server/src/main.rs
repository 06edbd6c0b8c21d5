//! Nestegg - three-step budgeting wizard server
//!
//! Usage:
//!   nestegg                      Serve on 127.0.0.1:3000
//!   nestegg --port 8080          Serve on another port
//!   nestegg --session-ttl-secs 600 --verbose

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nestegg_server::ServerConfig;

#[derive(Parser)]
#[command(name = "nestegg", about = "Budgeting wizard web server", version)]
struct Cli {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Session inactivity timeout in seconds
    #[arg(long, default_value_t = 1800)]
    session_ttl_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = ServerConfig {
        session_ttl: Duration::from_secs(cli.session_ttl_secs),
    };

    nestegg_server::serve(&cli.host, cli.port, config).await
}
