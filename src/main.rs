//! Host-based HTTP redirect service.
//!
//! Answers every request with a permanent redirect chosen by its Host header.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌───────────────────────────────────────────┐
//!     ──────────────────────────┼─▶ http::server ──▶ routing::source        │
//!                               │                     (per request | watch)  │
//!                               │                          │                 │
//!                               │                          ▼                 │
//!                               │                  routing::table            │
//!                               │          exact → strip www. → add www.     │
//!                               │                          │                 │
//!                               │                          ▼                 │
//!     301 / 404 / 204           │                routing::destination        │
//!     ◀─────────────────────────┼── http::response ◀─ base + path?query#frag │
//!                               └───────────────────────────────────────────┘
//!                                        ▲
//!                               redirects.json (seeded on first run)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use host_redirect::config::{load_config, RefreshPolicy, ServiceConfig};
use host_redirect::config::validation::validate_config;
use host_redirect::lifecycle::{startup, wait_for_termination, Shutdown};
use host_redirect::observability::init_logging;
use host_redirect::RedirectServer;

#[derive(Parser, Debug)]
#[command(name = "host-redirect")]
#[command(about = "Redirect requests to per-host destinations", long_about = None)]
struct Cli {
    /// Service configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:4004.
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Redirect store (JSON object of host → URL).
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// When the redirect store is re-read.
    #[arg(short, long, value_enum)]
    refresh: Option<RefreshPolicy>,
}

impl Cli {
    fn apply(&self, config: &mut ServiceConfig) {
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind.to_string();
        }
        if let Some(table) = &self.table {
            config.table.path = table.clone();
        }
        if let Some(refresh) = self.refresh {
            config.table.refresh = refresh;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    cli.apply(&mut config);
    validate_config(&config).map_err(host_redirect::config::ConfigError::Validation)?;

    init_logging(&config.observability.log_level);
    tracing::info!("host-redirect v{} starting", env!("CARGO_PKG_VERSION"));

    let prepared = startup::prepare_table(&config.table)?;
    // Keeps the store watcher alive for the life of the server.
    let _watcher = prepared.watcher;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "URL redirector listening");
    tracing::info!(
        "Test with: curl -H \"Host: old-site.com\" http://localhost:{}/",
        local_addr.port()
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on(wait_for_termination()));

    RedirectServer::new(&config, prepared.source)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
