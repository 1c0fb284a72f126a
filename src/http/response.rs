//! Response construction.
//!
//! # Responsibilities
//! - Render the permanent-redirect page (Location + meta refresh)
//! - Render the "no redirect configured" guidance page
//! - Empty 204 for favicon requests
//!
//! # Design Decisions
//! - Bodies are small inline HTML; every interpolated value is escaped
//! - A destination that cannot be a header value becomes a 500, never a panic

use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::routing::ResolvedDestination;

const HTML: &str = "text/html; charset=utf-8";

/// 301 to a reconstructed destination.
#[derive(Debug, Clone)]
pub struct PermanentRedirect {
    pub location: String,
}

impl From<ResolvedDestination> for PermanentRedirect {
    fn from(destination: ResolvedDestination) -> Self {
        Self {
            location: destination.url,
        }
    }
}

impl IntoResponse for PermanentRedirect {
    fn into_response(self) -> Response {
        let location = match HeaderValue::from_str(&self.location) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(destination = %self.location, error = %e, "Destination is not a valid Location header");
                return (StatusCode::INTERNAL_SERVER_ERROR, "Invalid redirect destination").into_response();
            }
        };

        let target = escape_html(&self.location);
        let body = format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <title>Redirecting...</title>\n\
             <meta http-equiv=\"refresh\" content=\"0; url={target}\">\n\
             </head>\n\
             <body>\n\
             <h1>Redirecting to {target}</h1>\n\
             <p><a href=\"{target}\">Click here if not redirected</a></p>\n\
             </body>\n\
             </html>\n"
        );

        (
            StatusCode::MOVED_PERMANENTLY,
            [
                (header::LOCATION, location),
                (header::CONTENT_TYPE, HeaderValue::from_static(HTML)),
            ],
            body,
        )
            .into_response()
    }
}

/// 404 explaining how to add a mapping for an unknown host.
#[derive(Debug, Clone)]
pub struct NotConfigured {
    pub host: Option<String>,
    pub store_path: PathBuf,
}

impl NotConfigured {
    pub fn new(host: Option<&str>, store_path: &Path) -> Self {
        Self {
            host: host.map(str::to_string),
            store_path: store_path.to_path_buf(),
        }
    }
}

impl IntoResponse for NotConfigured {
    fn into_response(self) -> Response {
        let host = escape_html(self.host.as_deref().unwrap_or(""));
        let store = escape_html(&self.store_path.display().to_string());
        let body = format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head><title>Not Found</title></head>\n\
             <body>\n\
             <h1>No redirect configured for: {host}</h1>\n\
             <p>Add \"{host}\": \"https://your-target.com\" to {store}</p>\n\
             </body>\n\
             </html>\n"
        );

        (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, HeaderValue::from_static(HTML))],
            body,
        )
            .into_response()
    }
}

/// Empty 204 response.
pub fn no_content() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    response
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
