//! Cross-origin policy
//!
//! A static allow-list decides which declared origins may read responses.
//! A request without an `Origin` header is same-origin (or a non-browser
//! caller) and is always allowed; no allow-origin header is emitted for
//! it. Allowed cross-origin requests get the requesting origin echoed
//! back. The policy is applied once, as a router-level layer; handlers
//! never write CORS headers themselves.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed to read responses from browser contexts.
pub const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://localhost:1234",
    "http://movies.com",
];

/// Methods advertised to preflight requests.
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
];

/// Pure allow-list decision for a declared origin.
pub fn origin_allowed(origin: &str) -> bool {
    ALLOWED_ORIGINS.contains(&origin)
}

/// Builds the router-level CORS layer. Answers preflights with the
/// allowed-methods set and echoes allow-listed origins on every response.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
            origin.to_str().map(origin_allowed).unwrap_or(false)
        }))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_origins_allowed() {
        assert!(origin_allowed("http://localhost:8080"));
        assert!(origin_allowed("http://localhost:1234"));
        assert!(origin_allowed("http://movies.com"));
    }

    #[test]
    fn test_unlisted_origins_rejected() {
        assert!(!origin_allowed("http://evil.com"));
        assert!(!origin_allowed("https://movies.com"));
        assert!(!origin_allowed("http://localhost:3000"));
    }

    #[test]
    fn test_matching_is_exact() {
        assert!(!origin_allowed("http://movies.com/"));
        assert!(!origin_allowed("HTTP://MOVIES.COM"));
    }

    #[test]
    fn test_layer_builds() {
        let _layer = cors_layer();
    }
}
