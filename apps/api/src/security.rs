//! HTTP security configuration: Host allow-list, CORS trusted origins and
//! response hardening headers. Built once from `Config` at startup.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, request::Parts, HeaderValue, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;

/// Wraps `router` with the security layers selected by `config`.
pub fn apply(router: Router, config: &Config) -> Router {
    let router = router.layer(cors_layer(&config.cors_origins));

    let router = if config.allowed_hosts.is_empty() {
        router
    } else {
        let hosts = Arc::new(config.allowed_hosts.clone());
        router.layer(middleware::from_fn_with_state(hosts, enforce_allowed_hosts))
    };

    if config.debug {
        return router;
    }

    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
}

/// Builds the CORS layer. No trusted origins means permissive.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let trusted = Arc::new(origins.to_vec());
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| origin_allowed(o, &trusted))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Rejects requests whose Host is not on the allow-list.
pub async fn enforce_allowed_hosts(
    State(allowed): State<Arc<Vec<String>>>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| request.uri().host())
        .map(str::to_string);

    match host {
        Some(host) if host_allowed(&host, &allowed) => next.run(request).await,
        other => {
            warn!("Rejected request for disallowed host {:?}", other);
            AppError::Validation("Invalid host".to_string()).into_response()
        }
    }
}

/// Matches a Host header value against the allow-list.
///
/// `*` allows everything; a leading `.` matches the domain and any subdomain.
pub fn host_allowed(host: &str, allowed: &[String]) -> bool {
    let host = strip_port(host).to_ascii_lowercase();

    allowed.iter().any(|pattern| {
        let pattern = pattern.to_ascii_lowercase();
        if pattern == "*" {
            true
        } else if let Some(domain) = pattern.strip_prefix('.') {
            host == domain || host.ends_with(&pattern)
        } else {
            host == pattern
        }
    })
}

/// Matches an Origin against trusted origins; `scheme://*.domain` covers subdomains.
pub fn origin_allowed(origin: &str, trusted: &[String]) -> bool {
    trusted.iter().any(|pattern| match pattern.split_once("://*.") {
        Some((scheme, domain)) => origin
            .strip_prefix(scheme)
            .and_then(|rest| rest.strip_prefix("://"))
            .is_some_and(|host| host.ends_with(&format!(".{domain}"))),
        None => origin == pattern,
    })
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        // IPv6 literal: [::1]:8080
        return rest.split(']').next().unwrap_or(rest);
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_host_allowed_exact_and_port() {
        let allowed = list(&["localhost", "127.0.0.1"]);
        assert!(host_allowed("localhost:8080", &allowed));
        assert!(host_allowed("127.0.0.1", &allowed));
        assert!(!host_allowed("evil.com", &allowed));
    }

    #[test]
    fn test_host_allowed_leading_dot_covers_subdomains() {
        let allowed = list(&[".vercel.app"]);
        assert!(host_allowed("vercel.app", &allowed));
        assert!(host_allowed("my-app.vercel.app", &allowed));
        assert!(!host_allowed("notvercel.app", &allowed));
    }

    #[test]
    fn test_host_allowed_ipv6_and_wildcard() {
        assert!(host_allowed("[::1]:8080", &list(&["::1"])));
        assert!(host_allowed("anything.example", &list(&["*"])));
    }

    #[test]
    fn test_origin_allowed_with_wildcard_subdomain() {
        let trusted = list(&["https://*.vercel.app", "http://localhost:8080"]);
        assert!(origin_allowed("https://resume.vercel.app", &trusted));
        assert!(origin_allowed("http://localhost:8080", &trusted));
        assert!(!origin_allowed("http://resume.vercel.app", &trusted));
        assert!(!origin_allowed("https://vercel.app.evil.com", &trusted));
        assert!(!origin_allowed("http://localhost:3000", &trusted));
    }

    fn guarded_router(debug: bool) -> Router {
        let config = Config {
            groq_api_key: None,
            port: 0,
            rust_log: "info".into(),
            debug,
            allowed_hosts: list(&["localhost"]),
            cors_origins: vec![],
            static_dir: "static".into(),
            scratch_dir: std::env::temp_dir(),
        };
        apply(Router::new().route("/", get(|| async { "ok" })), &config)
    }

    #[tokio::test]
    async fn test_disallowed_host_is_rejected() {
        let response = guarded_router(false)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "attacker.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_allowed_host_gets_security_headers() {
        let response = guarded_router(false)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[tokio::test]
    async fn test_debug_mode_skips_security_headers() {
        let response = guarded_router(true)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "localhost")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::X_FRAME_OPTIONS).is_none());
    }
}
