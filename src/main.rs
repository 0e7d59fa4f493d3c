//! client-ip echo server.
//!
//! Serves every path with a JSON body describing the client address the
//! middleware resolved for the request.
//!
//! ```text
//!     Client ──▶ proxy/CDN ──▶ ┌──────────────────────────────────────────┐
//!                              │ TraceLayer                               │
//!                              │   → ClientIpLayer (headers → PeerAddr)   │
//!                              │   → ContextPropagationLayer (→ context)  │
//!                              │   → echo handler (JSON)                  │
//!                              └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use client_ip::config::{load_config, validation::validate_config, AppConfig, ConfigError};
use client_ip::lifecycle::Shutdown;
use client_ip::observability::logging;
use client_ip::HttpServer;

#[derive(Parser)]
#[command(name = "client-ip")]
#[command(about = "Echo the client address resolved from proxy headers", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overrides listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Extra override header, consulted after those from the config file.
    #[arg(long = "header", value_name = "NAME")]
    headers: Vec<String>,
}

fn build_config(cli: Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    config.client_ip.headers.extend(cli.headers);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(Cli::parse())?;

    logging::init(&config.observability.log_level)?;

    tracing::info!("client-ip v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        override_headers = ?config.client_ip.headers,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_ctrl_c());

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
