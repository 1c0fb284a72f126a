//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the favicon and redirect handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Resolve each request against the current redirect table
//! - Drain in-flight requests on shutdown

use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::request::{propagate_request_id_layer, redirect_request, set_request_id_layer};
use crate::http::response::{no_content, NotConfigured, PermanentRedirect};
use crate::routing::{ResolvedDestination, TableSource};

/// Path browsers request for a site icon; never redirected.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: TableSource,
}

/// HTTP server for the redirect service.
pub struct RedirectServer {
    router: Router,
}

impl RedirectServer {
    /// Create a new HTTP server serving redirects from `table`.
    pub fn new(config: &ServiceConfig, table: TableSource) -> Self {
        let state = AppState { table };
        Self {
            router: build_router(config, state),
        }
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires, then let in-flight requests finish.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the service in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    Router::new()
        .route(FAVICON_PATH, any(favicon_handler))
        .fallback(redirect_handler)
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}

async fn favicon_handler() -> Response {
    no_content()
}

/// Main redirect handler.
/// Looks up the host, rebuilds the destination and answers 301 or 404.
async fn redirect_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let inbound = redirect_request(&request);
    let host = inbound.host.as_deref();

    tracing::info!(
        host = host.unwrap_or(""),
        path = %request.uri().path(),
        "Request received"
    );

    let table = state.table.current().await;

    let Some(base) = host.and_then(|h| table.resolve(h)) else {
        tracing::warn!(host = host.unwrap_or(""), "No redirect found");
        return NotConfigured::new(host, state.table.path()).into_response();
    };

    let destination = ResolvedDestination::new(base, &inbound);
    tracing::info!(
        host = host.unwrap_or(""),
        destination = %destination.url,
        "Redirecting"
    );

    PermanentRedirect::from(destination).into_response()
}
