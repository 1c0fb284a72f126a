//! Request inspection.
//!
//! # Responsibilities
//! - Extract routing-relevant information (host, path, query)
//! - Provide the request ID layers
//!
//! # Design Decisions
//! - Host is taken verbatim from the Host header, port included
//! - HTTP/2 requests without a Host header fall back to the URI authority
//! - Request ID added as early as possible for tracing

use axum::http::{header, HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::routing::RedirectRequest;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Host the client asked for, if it sent one.
pub fn request_host<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()))
        .filter(|h| !h.is_empty())
}

/// Build the routing view of an inbound request.
pub fn redirect_request<B>(request: &Request<B>) -> RedirectRequest {
    let uri = request.uri();
    RedirectRequest {
        host: request_host(request).map(str::to_string),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        // The HTTP request target never carries a fragment.
        fragment: None,
    }
}

/// Assigns a UUID v4 `x-request-id` to requests that lack one.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_host_header_verbatim() {
        let req = Request::builder()
            .uri("/about?x=1")
            .header("Host", "old-site.com:4004")
            .body(Body::empty())
            .unwrap();

        let parsed = redirect_request(&req);
        assert_eq!(parsed.host.as_deref(), Some("old-site.com:4004"));
        assert_eq!(parsed.path, "/about");
        assert_eq!(parsed.query.as_deref(), Some("x=1"));
        assert_eq!(parsed.fragment, None);
    }

    #[test]
    fn test_authority_fallback() {
        let req = Request::builder()
            .uri("http://old-site.com/about")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_host(&req), Some("old-site.com"));
    }

    #[test]
    fn test_missing_host() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(request_host(&req), None);
        assert_eq!(redirect_request(&req).host, None);
    }
}
