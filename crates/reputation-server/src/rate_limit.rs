//! A fixed-capacity sliding-window rate limiter keyed by client IP:
//! 600 requests per 60 second window, backed by a `DashMap` so lookups
//! for distinct IPs never contend with each other.

use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_client_ip::ClientIp;
use dashmap::DashMap;

pub const LIMIT: usize = 600;
pub const WINDOW: Duration = Duration::from_secs(60);

pub struct RateLimiter {
    windows: DashMap<IpAddr, VecDeque<Instant>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            limit,
            window,
        }
    }

    /// Drops timestamps that have aged out of the window, then checks
    /// whether admitting one more request would exceed `limit`.
    fn allow(&self, ip: IpAddr, now: Instant) -> bool {
        let mut entry = self.windows.entry(ip).or_default();
        while matches!(entry.front(), Some(oldest) if now.duration_since(*oldest) > self.window) {
            entry.pop_front();
        }
        if entry.len() >= self.limit {
            return false;
        }
        entry.push_back(now);
        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(LIMIT, WINDOW)
    }
}

pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    ClientIp(ip): ClientIp,
    req: Request,
    next: Next,
) -> Response {
    if limiter.allow(ip, Instant::now()) {
        next.run(req).await
    } else {
        (StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded").into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn admits_up_to_limit_then_rejects() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));
        let ip: IpAddr = "127.0.0.1".parse().unwrap();
        let now = Instant::now();
        assert!(limiter.allow(ip, now));
        assert!(limiter.allow(ip, now));
        assert!(!limiter.allow(ip, now));
    }

    #[test]
    fn window_expiry_readmits_requests() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let ip: IpAddr = "127.0.0.1".parse().unwrap();
        let now = Instant::now();
        assert!(limiter.allow(ip, now));
        assert!(!limiter.allow(ip, now));
        let later = now + Duration::from_secs(61);
        assert!(limiter.allow(ip, later));
    }

    #[test]
    fn distinct_ips_have_independent_budgets() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();
        let a: IpAddr = "127.0.0.1".parse().unwrap();
        let b: IpAddr = "127.0.0.2".parse().unwrap();
        assert!(limiter.allow(a, now));
        assert!(limiter.allow(b, now));
    }
}
