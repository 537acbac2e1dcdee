use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Origins a local browser front end is usually served from.
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Normalize a raw origin list: trim entries and drop empty ones.
#[must_use]
pub fn normalize_origins(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether `origin` matches one of the configured prefixes (`*` matches all).
#[must_use]
pub fn origin_allowed(origin: &str, allowed: &[String]) -> bool {
    allowed
        .iter()
        .any(|a| a == "*" || origin.starts_with(a.as_str()))
}

/// Build a CORS layer for gRPC-Web with the given allowed origins.
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin
                .to_str()
                .is_ok_and(|o| origin_allowed(o, &cors_origins))
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_CORS_ORIGINS.split(',').map(str::to_string).collect()
    }

    #[test]
    fn test_localhost_dev_server_allowed() {
        assert!(origin_allowed("http://localhost:5173", &defaults()));
        assert!(origin_allowed("http://127.0.0.1:8080", &defaults()));
    }

    #[test]
    fn test_foreign_origin_rejected() {
        assert!(!origin_allowed("https://evil.example", &defaults()));
    }

    #[test]
    fn test_wildcard_allows_everything() {
        assert!(origin_allowed("https://anything.example", &["*".to_string()]));
    }

    #[test]
    fn test_normalize_origins_trims_and_drops_empty() {
        let raw = vec![" http://a ".to_string(), String::new(), "  ".to_string()];
        assert_eq!(normalize_origins(&raw), vec!["http://a".to_string()]);
    }
}
