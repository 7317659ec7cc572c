//! Per-address rate limiting middleware.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::RateLimitConfig;
use crate::http::error::ApiError;

/// Tracked-address ceiling before expired windows are swept.
const SWEEP_THRESHOLD: usize = 10_000;

/// Request count for one address within its current window.
struct Window {
    started: Instant,
    count: u32,
}

/// State for the fixed-window rate limiter.
///
/// One counter per originating IP; the window restarts in place once
/// its length has elapsed. The mutex makes check-and-increment atomic
/// for concurrent requests from the same address.
pub struct RateLimiterState {
    windows: Mutex<HashMap<IpAddr, Window>>,
    config: RateLimitConfig,
}

impl RateLimiterState {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Record one request from `ip`; true while within the cap.
    fn check(&self, ip: IpAddr) -> bool {
        if !self.config.enabled {
            return true;
        }

        let window = Duration::from_secs(self.config.window_secs);
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");

        if windows.len() >= SWEEP_THRESHOLD {
            windows.retain(|_, w| w.started.elapsed() < window);
        }

        let entry = windows.entry(ip).or_insert_with(|| Window {
            started: Instant::now(),
            count: 0,
        });

        if entry.started.elapsed() >= window {
            entry.started = Instant::now();
            entry.count = 0;
        }

        if entry.count < self.config.max_requests {
            entry.count += 1;
            true
        } else {
            false
        }
    }
}

/// Middleware function for per-address rate limiting.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if state.check(addr.ip()) {
        next.run(request).await
    } else {
        tracing::warn!(client = %addr.ip(), "Rate limit exceeded");
        ApiError::RateLimited.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32, window_secs: u64) -> RateLimiterState {
        RateLimiterState::new(RateLimitConfig {
            enabled: true,
            max_requests,
            window_secs,
        })
    }

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([127, 0, 0, last])
    }

    #[test]
    fn requests_past_the_cap_are_rejected() {
        let state = limiter(3, 60);
        for _ in 0..3 {
            assert!(state.check(ip(1)));
        }
        assert!(!state.check(ip(1)));
        assert!(!state.check(ip(1)));
    }

    #[test]
    fn addresses_are_counted_independently() {
        let state = limiter(1, 60);
        assert!(state.check(ip(1)));
        assert!(state.check(ip(2)));
        assert!(!state.check(ip(1)));
        assert!(!state.check(ip(2)));
    }

    #[test]
    fn counts_reset_once_the_window_elapses() {
        // Zero-length window: every check starts a fresh window, so a
        // cap of one never rejects.
        let state = limiter(1, 0);
        for _ in 0..5 {
            assert!(state.check(ip(1)));
        }
    }

    #[test]
    fn disabled_limiter_passes_everything() {
        let state = RateLimiterState::new(RateLimitConfig {
            enabled: false,
            max_requests: 0,
            window_secs: 60,
        });
        for _ in 0..10 {
            assert!(state.check(ip(1)));
        }
    }
}
