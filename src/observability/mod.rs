//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → tower-http TraceLayer (per-request spans with request IDs)
//!
//! Consumers:
//!     → stdout (fmt layer)
//! ```

pub mod logging;

pub use logging::init_logging;
