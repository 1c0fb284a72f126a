//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! service config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!
//! Redirect store (JSON) under the watch refresh policy:
//!     watcher.rs detects change
//!     → routing::TableSource reloads the table
//!     → atomic swap of Arc<RedirectTable>
//!     → handlers observe the new table on their next request
//! ```
//!
//! # Design Decisions
//! - Service config is immutable once loaded
//! - All fields have defaults to allow minimal (or no) config files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, MonitorConfig, ObservabilityConfig, RefreshPolicy, ServiceConfig,
    TableConfig, TimeoutConfig, DEFAULT_PORT,
};
