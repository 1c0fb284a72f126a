//! Periodic URL health checker.
//!
//! Unrelated to the redirect service; shares only its config file format.

use std::path::PathBuf;

use clap::Parser;

use host_redirect::config::validation::validate_config;
use host_redirect::config::{load_config, ConfigError, ServiceConfig};
use host_redirect::lifecycle::{wait_for_termination, Shutdown};
use host_redirect::monitor::UrlMonitor;
use host_redirect::observability::init_logging;

#[derive(Parser)]
#[command(name = "url-monitor")]
#[command(about = "Ping a list of URLs on an interval and log the results", long_about = None)]
struct Cli {
    /// Configuration file (TOML); only the [monitor] and [observability] tables are read.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between check rounds.
    #[arg(short, long)]
    interval: Option<u64>,

    /// URLs to check; replaces the configured list when given.
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(interval) = cli.interval {
        config.monitor.interval_secs = interval;
    }
    if !cli.urls.is_empty() {
        config.monitor.urls = cli.urls;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability.log_level);

    let monitor = UrlMonitor::new(&config.monitor)?;

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on(wait_for_termination()));

    monitor.run(monitor_shutdown).await;

    tracing::info!("URL monitor stopped");
    Ok(())
}
