//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, extract host/path/query)
//!     → routing layer resolves the host against the redirect table
//!     → response.rs (301 page, 404 guidance page, or 204)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{build_router, AppState, RedirectServer, FAVICON_PATH};
