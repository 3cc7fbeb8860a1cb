//! CORS policy for browser clients.

use axum::http::header::{self, HeaderName};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer from an origin list.
///
/// `*` allows any origin; otherwise a comma-separated list of origins.
/// Returns `None` (no CORS headers at all) when the list is empty.
pub fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() {
        return None;
    }

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
        ]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_origin_list_disables_cors() {
        assert!(build_cors_layer("").is_none());
        assert!(build_cors_layer("  ").is_none());
        assert!(build_cors_layer(" , ").is_none());
    }

    #[test]
    fn wildcard_and_lists_build_a_layer() {
        assert!(build_cors_layer("*").is_some());
        assert!(build_cors_layer("http://localhost:5173, https://chimera.example").is_some());
    }
}
