//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Configure log level from config, overridable via `RUST_LOG`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives for `level`, e.g. `host_redirect=info,tower_http=info`.
pub fn default_directives(level: &str) -> String {
    format!("host_redirect={level},url_monitor={level},tower_http={level}")
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(level).into());

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        let directives = default_directives("debug");
        assert_eq!(directives, "host_redirect=debug,url_monitor=debug,tower_http=debug");
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
