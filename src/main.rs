//! Uppercase text service.
//!
//! ```text
//!     Client Request
//!     ─────────────▶ request id ─▶ trace ─▶ cors ─▶ catch panic ─▶ timeout
//!                                                                     │
//!                  ┌──────────────────────────────────────────────────┘
//!                  ▼
//!        ┌───────────────────┐   POST /api/uppercase       ┌───────────┐
//!        │      router       │────────────────────────────▶│           │
//!        │                   │   POST /api/uppercase-file  │ transform │
//!        │                   │──▶ upload filter ──────────▶│           │
//!        │                   │   GET / , GET /health       └─────┬─────┘
//!        │                   │──▶ static JSON                    │
//!        │                   │   anything else                   ▼
//!        │                   │──▶ 404 + endpoint list      JSON envelope
//!        └───────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use uppercase_service::config::{load_config, ServiceConfig};
use uppercase_service::lifecycle::{shutdown_signal, Shutdown};
use uppercase_service::observability::{logging, metrics};
use uppercase_service::HttpServer;

#[derive(Parser)]
#[command(name = "uppercase-service")]
#[command(about = "HTTP service that uppercases text and text files", long_about = None)]
struct Args {
    /// Optional TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("uppercase-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        max_file_size = config.uploads.max_file_size,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    metrics::init_from_config(&config.observability)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
