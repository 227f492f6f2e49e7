//! Application state and rate limiting.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Instant;

use numen_core::Meanings;
use tokio::sync::Mutex;

use super::meanings::compute_etag;
use super::RATE_LIMIT_WINDOW_SECS;
use crate::config::Settings;

/// Per-IP request tracker: (request count, window start time).
type IpTracker = HashMap<IpAddr, (u64, Instant)>;

struct TrackerState {
    ips: IpTracker,
    /// When expired windows were last evicted.
    last_prune: Instant,
}

/// In-memory per-IP rate limiter.
pub(crate) struct RateLimiter {
    tracker: Mutex<TrackerState>,
    /// Maximum requests per window.
    max_requests: u64,
}

impl RateLimiter {
    pub(crate) fn new(max_requests: u64) -> Self {
        Self {
            tracker: Mutex::new(TrackerState {
                ips: HashMap::new(),
                last_prune: Instant::now(),
            }),
            max_requests,
        }
    }

    /// Check if a request from the given IP is allowed.
    /// Returns Ok(()) if allowed, Err(retry_after_secs) if rate limited.
    pub(crate) async fn check(&self, ip: IpAddr) -> Result<(), u64> {
        self.check_at(ip, Instant::now()).await
    }

    async fn check_at(&self, ip: IpAddr, now: Instant) -> Result<(), u64> {
        let mut tracker = self.tracker.lock().await;

        // at most one eviction sweep per window
        let since_prune = now.saturating_duration_since(tracker.last_prune);
        if since_prune.as_secs() >= RATE_LIMIT_WINDOW_SECS {
            let before = tracker.ips.len();
            tracker.ips.retain(|_, (_, window_start)| {
                now.saturating_duration_since(*window_start).as_secs() < RATE_LIMIT_WINDOW_SECS
            });
            tracker.last_prune = now;
            tracing::trace!(evicted = before - tracker.ips.len(), "pruned rate limit windows");
        }

        let (count, window_start) = tracker.ips.entry(ip).or_insert((0, now));

        let elapsed = now.saturating_duration_since(*window_start).as_secs();
        if elapsed >= RATE_LIMIT_WINDOW_SECS {
            *count = 0;
            *window_start = now;
        }

        *count += 1;
        if *count > self.max_requests {
            Err(RATE_LIMIT_WINDOW_SECS.saturating_sub(elapsed))
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    async fn tracked_ips(&self) -> usize {
        self.tracker.lock().await.ips.len()
    }
}

/// Application state shared across request handlers. Read-only after startup
/// apart from the rate limiter.
pub(crate) struct AppState {
    pub(crate) meanings: Meanings,
    /// SHA-256 of the serialized meanings, served as the `/meanings` ETag.
    pub(crate) meanings_etag: String,
    /// Locale used when a request carries no `?locale=`.
    pub(crate) locale: String,
    pub(crate) rate_limiter: RateLimiter,
    /// Optional API key for authentication. None = no auth required.
    pub(crate) api_key: Option<String>,
}

impl AppState {
    pub(crate) fn new(settings: Settings) -> Self {
        let meanings_etag = compute_etag(&settings.meanings.to_json());
        AppState {
            meanings: settings.meanings,
            meanings_etag,
            locale: settings.locale,
            rate_limiter: RateLimiter::new(settings.serve.rate_limit),
            api_key: settings.serve.api_key,
        }
    }

    /// The request's locale, or the configured one.
    pub(crate) fn locale<'a>(&'a self, requested: &'a Option<String>) -> &'a str {
        requested
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(&self.locale)
    }
}
