//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Check monitor URLs are absolute http(s) URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("table.path must not be empty")]
    EmptyTablePath,

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("monitor url '{0}' is not an absolute http(s) URL")]
    MonitorUrl(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.table.path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyTablePath);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroDuration("timeouts.request_secs"));
    }
    if config.monitor.interval_secs == 0 {
        errors.push(ValidationError::ZeroDuration("monitor.interval_secs"));
    }
    if config.monitor.timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("monitor.timeout_secs"));
    }

    for raw in &config.monitor.urls {
        if !is_http_url(raw) {
            errors.push(ValidationError::MonitorUrl(raw.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// True if `raw` parses as an absolute URL with an http or https scheme.
pub fn is_http_url(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.monitor.urls = vec!["ftp://example.com".into(), "example.com".into()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("not-an-address".into()),
                ValidationError::ZeroDuration("timeouts.request_secs"),
                ValidationError::MonitorUrl("ftp://example.com".into()),
                ValidationError::MonitorUrl("example.com".into()),
            ]
        );
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://new-site.com"));
        assert!(is_http_url("http://example.com/path?q=1"));
        assert!(!is_http_url("new-site.com"));
        assert!(!is_http_url("mailto:someone@example.com"));
    }
}
