//! Host-based HTTP redirect service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod routing;

pub use config::schema::ServiceConfig;
pub use http::RedirectServer;
pub use lifecycle::Shutdown;
pub use routing::{RedirectTable, TableSource};
