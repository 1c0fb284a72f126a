//! Configuration schema definitions.
//!
//! This module defines the service configuration structure.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fixed port the redirect service listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 4004;

/// Root configuration for the redirect service and the URL monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Redirect table store and refresh policy.
    pub table: TableConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Settings for the standalone `url-monitor` binary.
    pub monitor: MonitorConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:4004").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", DEFAULT_PORT),
        }
    }
}

/// When the redirect table is re-read from its store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Load the store on every request.
    #[default]
    PerRequest,
    /// Load once, then reload when the file watcher reports a change.
    Watch,
}

impl std::fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshPolicy::PerRequest => write!(f, "per_request"),
            RefreshPolicy::Watch => write!(f, "watch"),
        }
    }
}

/// Redirect table configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TableConfig {
    /// Path of the JSON redirect store.
    pub path: PathBuf,

    /// Refresh policy for the in-memory table.
    pub refresh: RefreshPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./redirects.json"),
            refresh: RefreshPolicy::PerRequest,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// URL monitor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// URLs checked on every round.
    pub urls: Vec<String>,

    /// Seconds between check rounds.
    pub interval_secs: u64,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            urls: vec![
                "https://stackoverflow.com".to_string(),
                "http://example.com".to_string(),
            ],
            interval_secs: 60,
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:4004");
        assert_eq!(config.table.path, PathBuf::from("./redirects.json"));
        assert_eq!(config.table.refresh, RefreshPolicy::PerRequest);
        assert_eq!(config.monitor.interval_secs, 60);
        assert_eq!(config.monitor.timeout_secs, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [table]
            refresh = "watch"

            [monitor]
            urls = ["https://example.org"]
            "#,
        )
        .unwrap();

        assert_eq!(config.table.refresh, RefreshPolicy::Watch);
        assert_eq!(config.table.path, PathBuf::from("./redirects.json"));
        assert_eq!(config.listener.bind_address, "0.0.0.0:4004");
        assert_eq!(config.monitor.urls, vec!["https://example.org".to_string()]);
        assert_eq!(config.monitor.interval_secs, 60);
    }
}
