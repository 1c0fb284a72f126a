//! Periodic probing loop.

use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::MonitorConfig;
use crate::monitor::check::{check_url, CheckResult, RoundSummary};

pub struct UrlMonitor {
    client: reqwest::Client,
    urls: Vec<String>,
    interval: Duration,
}

impl UrlMonitor {
    pub fn new(config: &MonitorConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("url-monitor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            urls: config.urls.clone(),
            interval: Duration::from_secs(config.interval_secs),
        })
    }

    /// Check every URL concurrently; results keep the configured order.
    pub async fn check_all(&self) -> Vec<CheckResult> {
        join_all(self.urls.iter().map(|url| check_url(&self.client, url))).await
    }

    /// Run one round and log its results.
    pub async fn round(&self) -> RoundSummary {
        tracing::info!("Ping check started");

        let results = self.check_all().await;
        for result in &results {
            if result.is_up() {
                tracing::info!("{}", result);
            } else {
                tracing::warn!("{}", result);
            }
        }

        let summary = RoundSummary::from_results(&results);
        tracing::info!("Summary: {}", summary);
        summary
    }

    /// Check immediately, then every interval, until `shutdown` fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            urls = self.urls.len(),
            interval_secs = self.interval.as_secs(),
            "URL monitor starting"
        );
        for (i, url) in self.urls.iter().enumerate() {
            tracing::info!("  {}. {}", i + 1, url);
        }

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.round().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("URL monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}
