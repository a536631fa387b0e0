//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use attend_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    // Origins
    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    if config.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    layer.max_age(Duration::from_secs(config.max_age_seconds))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use tower::ServiceExt;

    use super::*;

    async fn preflight(config: &CorsConfig, origin: &str) -> (StatusCode, Option<String>) {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(build_cors_layer(config));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/ping")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let allow_origin = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string());
        (response.status(), allow_origin)
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let (status, allow_origin) =
            preflight(&CorsConfig::default(), "https://anywhere.example").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(allow_origin.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed_and_others_are_not() {
        let config = CorsConfig {
            allowed_origins: vec!["https://attend.example.edu".to_string()],
            ..CorsConfig::default()
        };

        let (_, allowed) = preflight(&config, "https://attend.example.edu").await;
        assert_eq!(allowed.as_deref(), Some("https://attend.example.edu"));

        let (_, rejected) = preflight(&config, "https://evil.example").await;
        assert!(rejected.is_none());
    }
}
