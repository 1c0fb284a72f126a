//! URL monitor subsystem.
//!
//! Independent of the redirect service; drives the `url-monitor` binary.
//!
//! # Data Flow
//! ```text
//! Periodic timer (runner.rs)
//!     → check.rs (GET each URL concurrently, with timeout)
//!     → one log line per URL + "<n> up, <m> down" summary
//! ```
//!
//! # Design Decisions
//! - Any HTTP response counts as up; only transport failures and timeouts are down
//! - First round runs immediately, then every interval
//! - Check results are logged, never persisted

pub mod check;
pub mod runner;

pub use check::{CheckOutcome, CheckResult, RoundSummary};
pub use runner::UrlMonitor;
