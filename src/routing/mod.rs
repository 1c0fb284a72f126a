//! Redirect routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (host, path, query)
//!     → source.rs (current table snapshot per refresh policy)
//!     → table.rs (exact, then www.-stripped, then www.-prefixed lookup)
//!     → destination.rs (base + path + ?query + #fragment)
//!     → Return: ResolvedDestination or NoMatch
//! ```
//!
//! # Design Decisions
//! - Table snapshots are immutable; a reload replaces the whole table
//! - Deterministic: same table and host always resolve the same way
//! - Explicit NoMatch rather than silent default

pub mod destination;
pub mod source;
pub mod table;

pub use destination::{build_destination, RedirectRequest, ResolvedDestination};
pub use source::TableSource;
pub use table::{RedirectTable, TableError};
