//! Destination URL reconstruction.
//!
//! # Responsibilities
//! - Split an inbound request target into path, query and fragment
//! - Append them to a stored base URL
//!
//! # Design Decisions
//! - Pure string operations; nothing is re-encoded or validated
//! - Exactly one trailing `/` is trimmed from the base so paths never double up
//! - A bare `/` path adds nothing

/// The parts of an inbound request that drive a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedirectRequest {
    /// Host header value as received, if any.
    pub host: Option<String>,
    /// Request path, e.g. `/about`.
    pub path: String,
    /// Query string without its leading `?`.
    pub query: Option<String>,
    /// Fragment without its leading `#`.
    pub fragment: Option<String>,
}

impl RedirectRequest {
    /// Build from a host and a raw request target such as `/a/b?x=1#top`.
    pub fn from_target(host: Option<&str>, target: &str) -> Self {
        let (rest, fragment) = match target.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            host: host.map(str::to_string),
            path: path.to_string(),
            query,
            fragment,
        }
    }
}

/// A looked-up base URL and the full redirect target built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    pub base: String,
    pub url: String,
}

impl ResolvedDestination {
    pub fn new(base: impl Into<String>, request: &RedirectRequest) -> Self {
        let base = base.into();
        let url = build_destination(
            &base,
            &request.path,
            request.query.as_deref(),
            request.fragment.as_deref(),
        );
        Self { base, url }
    }
}

/// Append `path`, `?query` and `#fragment` to `base`.
pub fn build_destination(
    base: &str,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    let mut url = base.strip_suffix('/').unwrap_or(base).to_string();

    if !path.is_empty() && path != "/" {
        url.push_str(path);
    }
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_adds_nothing() {
        assert_eq!(
            build_destination("https://target.example", "/", None, None),
            "https://target.example"
        );
        assert_eq!(
            build_destination("https://target.example/", "/", None, None),
            "https://target.example"
        );
    }

    #[test]
    fn test_path_and_query_preserved() {
        assert_eq!(
            build_destination("https://target.example", "/signup", Some("ref=67375D40"), None),
            "https://target.example/signup?ref=67375D40"
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        assert_eq!(
            build_destination("https://target.example/", "/x", None, None),
            "https://target.example/x"
        );
    }

    #[test]
    fn test_only_one_trailing_slash_stripped() {
        assert_eq!(
            build_destination("https://target.example//", "/x", None, None),
            "https://target.example//x"
        );
    }

    #[test]
    fn test_base_with_path_prefix() {
        assert_eq!(
            build_destination("https://new-site.com/blog", "/2024/post", None, None),
            "https://new-site.com/blog/2024/post"
        );
    }

    #[test]
    fn test_query_on_root_path() {
        assert_eq!(
            build_destination("https://target.example", "/", Some("a=1&b=2"), None),
            "https://target.example?a=1&b=2"
        );
    }

    #[test]
    fn test_fragment_appended_last() {
        assert_eq!(
            build_destination("https://target.example", "/docs", Some("v=2"), Some("intro")),
            "https://target.example/docs?v=2#intro"
        );
    }

    #[test]
    fn test_from_target_splits_parts() {
        let request = RedirectRequest::from_target(Some("old-site.com"), "/a/b?x=1&y=2#top");
        assert_eq!(request.host.as_deref(), Some("old-site.com"));
        assert_eq!(request.path, "/a/b");
        assert_eq!(request.query.as_deref(), Some("x=1&y=2"));
        assert_eq!(request.fragment.as_deref(), Some("top"));

        let request = RedirectRequest::from_target(None, "/plain");
        assert_eq!(request.path, "/plain");
        assert_eq!(request.query, None);
        assert_eq!(request.fragment, None);
    }

    #[test]
    fn test_resolved_destination() {
        let request = RedirectRequest::from_target(Some("old-site.com"), "/about");
        let resolved = ResolvedDestination::new("https://new-site.com", &request);
        assert_eq!(resolved.base, "https://new-site.com");
        assert_eq!(resolved.url, "https://new-site.com/about");
    }
}
