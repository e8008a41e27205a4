//! Synthetic rate-limit values reported on create responses.

use chrono::{DateTime, Utc};

use crate::settings::Settings;

/// Rate-limit values for one response.
///
/// `remaining` is always `limit - 1`; no request counting takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    pub limit: u32,
    pub remaining: u32,
    /// Epoch seconds at which the window resets.
    pub reset: i64,
}

impl RateLimitSnapshot {
    /// Snapshot for a response produced at `now`.
    #[must_use]
    pub fn at(settings: &Settings, now: DateTime<Utc>) -> Self {
        let window = i64::try_from(settings.rate_limit_window_secs).unwrap_or(i64::MAX);
        Self {
            limit: settings.rate_limit,
            remaining: settings.rate_limit.saturating_sub(1),
            reset: now.timestamp().saturating_add(window),
        }
    }
}
