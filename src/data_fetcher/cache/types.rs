//! Cache entry types with TTL support

use std::time::{Duration, Instant};

use crate::data_fetcher::models::{ScheduleResponse, ScoreboardResponse};

/// A cached response body of either endpoint family
#[derive(Debug, Clone)]
pub enum CachedPayload {
    Scoreboard(ScoreboardResponse),
    Schedule(ScheduleResponse),
}

/// A cached response plus the moment it was stored.
///
/// The TTL is not stored with the entry: it is read from the owning cache at
/// lookup time, so a changed cache duration applies to existing entries too.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub data: CachedPayload,
    pub cached_at: Instant,
}

impl CachedResponse {
    /// Creates a new cached entry stamped with the current instant
    pub fn new(data: CachedPayload) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
        }
    }

    /// Fresh while `age < ttl`; a zero TTL is therefore always expired.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() >= ttl
    }

    /// Gets the remaining time until expiration
    pub fn time_until_expiry(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.cached_at.elapsed())
    }
}
