//! Application-layer rate limiting for login and signup routes

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::error::{AppError, ErrorCode};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::state::AppState;

/// Login: 5 requests per minute per client
pub const LOGIN_LIMIT: u32 = 5;
/// Organization signup: 3 requests per minute per client
pub const SIGNUP_LIMIT: u32 = 3;
const WINDOW_SECS: u64 = 60;

struct IpEntry {
    count: u32,
    window_start: Instant,
}

#[derive(Clone, Default)]
pub struct RateLimiter {
    /// route name -> (IP -> entry)
    inner: Arc<Mutex<HashMap<&'static str, HashMap<String, IpEntry>>>>,
    /// Key clients by `X-Forwarded-For`; only set behind a proxy that overwrites it
    trust_forwarded_for: bool,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trusted_proxy(trust_forwarded_for: bool) -> Self {
        Self {
            trust_forwarded_for,
            ..Self::default()
        }
    }

    /// Returns `true` if the request is allowed, `false` if rate-limited.
    pub async fn check(
        &self,
        route: &'static str,
        ip: &str,
        max_requests: u32,
        window_secs: u64,
    ) -> bool {
        let mut map = self.inner.lock().await;
        let route_map = map.entry(route).or_default();
        let now = Instant::now();

        let entry = route_map.entry(ip.to_owned()).or_insert_with(|| IpEntry {
            count: 0,
            window_start: now,
        });

        if now.duration_since(entry.window_start).as_secs() >= window_secs {
            entry.count = 0;
            entry.window_start = now;
        }

        entry.count += 1;
        entry.count <= max_requests
    }

    /// Remove entries older than 5 minutes
    pub async fn cleanup(&self) {
        let mut map = self.inner.lock().await;
        let cutoff = std::time::Duration::from_secs(300);
        let now = Instant::now();

        for route_map in map.values_mut() {
            route_map.retain(|_, entry| now.duration_since(entry.window_start) < cutoff);
        }

        map.retain(|_, route_map| !route_map.is_empty());
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.inner.lock().await.values().map(HashMap::len).sum()
    }
}

/// Client IP: the peer address, or the first X-Forwarded-For entry when the
/// proxy is trusted.
fn extract_ip(request: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for
        && let Some(forwarded) = request.headers().get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(first) = val.split(',').next()
    {
        let ip = first.trim();
        if !ip.is_empty() {
            return ip.to_owned();
        }
    }

    request
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}

async fn limit(
    state: &AppState,
    route: &'static str,
    max_requests: u32,
    request: Request,
    next: Next,
) -> Response {
    let ip = extract_ip(&request, state.rate_limiter.trust_forwarded_for);
    if !state
        .rate_limiter
        .check(route, &ip, max_requests, WINDOW_SECS)
        .await
    {
        tracing::warn!(route, ip = %ip, "Rate limit exceeded");
        return AppError::new(ErrorCode::TooManyRequests).into_response();
    }
    next.run(request).await
}

/// Rate limit middleware for `POST /auth/token`
pub async fn login_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    limit(&state, "login", LOGIN_LIMIT, request, next).await
}

/// Rate limit middleware for `POST /organizations`
pub async fn signup_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    limit(&state, "signup", SIGNUP_LIMIT, request, next).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_limit_per_window() {
        let limiter = RateLimiter::new();
        for _ in 0..LOGIN_LIMIT {
            assert!(limiter.check("login", "10.0.0.1", LOGIN_LIMIT, 60).await);
        }
        assert!(!limiter.check("login", "10.0.0.1", LOGIN_LIMIT, 60).await);

        // Other clients and other routes are tracked separately
        assert!(limiter.check("login", "10.0.0.2", LOGIN_LIMIT, 60).await);
        assert!(limiter.check("signup", "10.0.0.1", SIGNUP_LIMIT, 60).await);
    }

    #[tokio::test]
    async fn test_elapsed_window_resets_count() {
        let limiter = RateLimiter::new();
        // A zero-length window has always elapsed
        assert!(limiter.check("signup", "ip", 1, 0).await);
        assert!(limiter.check("signup", "ip", 1, 0).await);
    }

    #[tokio::test]
    async fn test_cleanup_keeps_fresh_entries() {
        let limiter = RateLimiter::new();
        limiter.check("login", "a", 5, 60).await;
        limiter.check("signup", "b", 3, 60).await;
        limiter.cleanup().await;
        assert_eq!(limiter.tracked().await, 2);
    }

    #[test]
    fn test_extract_ip_ignores_forwarded_for_by_default() {
        let mut request = http::Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(extract_ip(&request, false), "unknown");

        let peer: std::net::SocketAddr = "198.51.100.4:50123".parse().unwrap();
        request
            .extensions_mut()
            .insert(axum::extract::ConnectInfo(peer));
        assert_eq!(extract_ip(&request, false), "198.51.100.4");
    }

    #[test]
    fn test_extract_ip_uses_forwarded_for_behind_trusted_proxy() {
        let request = http::Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(extract_ip(&request, true), "203.0.113.7");

        let request = http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(extract_ip(&request, true), "unknown");
    }
}
