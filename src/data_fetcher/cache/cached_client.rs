use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::types::{CachedPayload, CachedResponse};
use crate::constants::{DEFAULT_CACHE_DURATION_SECONDS, RESPONSE_CACHE_CAPACITY};
use crate::data_fetcher::api::create_cache_key;
use crate::data_fetcher::models::{ScheduleResponse, ScoreboardResponse};
use crate::data_fetcher::source::DataSource;
use crate::error::AppError;

/// Read-through cache in front of another [`DataSource`].
///
/// Only the dated calls are cached. "Today" and "upcoming" calls resolve
/// their dates at call time and always go straight to the wrapped source.
/// Expired entries are dropped lazily when they are next looked up.
pub struct CachedClient {
    inner: Arc<dyn DataSource>,
    cache: RwLock<LruCache<String, CachedResponse>>,
    cache_duration_seconds: AtomicU64,
}

impl CachedClient {
    pub fn new(inner: Arc<dyn DataSource>, cache_duration_seconds: u64) -> Self {
        Self::with_capacity(inner, cache_duration_seconds, RESPONSE_CACHE_CAPACITY)
    }

    pub fn with_default_duration(inner: Arc<dyn DataSource>) -> Self {
        Self::new(inner, DEFAULT_CACHE_DURATION_SECONDS)
    }

    pub fn with_capacity(
        inner: Arc<dyn DataSource>,
        cache_duration_seconds: u64,
        capacity: usize,
    ) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: RwLock::new(LruCache::new(capacity)),
            cache_duration_seconds: AtomicU64::new(cache_duration_seconds),
        }
    }

    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_seconds.load(Ordering::Relaxed))
    }

    /// Number of entries currently held, expired ones included
    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cache.read().await.is_empty()
    }

    #[instrument(skip(self))]
    async fn get_cached(&self, key: &str) -> Option<CachedPayload> {
        let ttl = self.cache_duration();
        let mut cache = self.cache.write().await;

        if let Some(entry) = cache.get(key) {
            if !entry.is_expired(ttl) {
                debug!(
                    "Cache hit: key={:?}, age={:?}, expires_in={:?}",
                    key,
                    entry.cached_at.elapsed(),
                    entry.time_until_expiry(ttl)
                );
                return Some(entry.data.clone());
            }

            warn!(
                "Removing expired cache entry: key={:?}, age={:?}, ttl={:?}",
                key,
                entry.cached_at.elapsed(),
                ttl
            );
            cache.pop(key);
        } else {
            debug!("Cache miss: key={:?}", key);
        }

        None
    }

    async fn set_cached(&self, key: String, data: CachedPayload) {
        debug!("Caching response: key={:?}", key);
        self.cache.write().await.put(key, CachedResponse::new(data));
    }
}

#[async_trait]
impl DataSource for CachedClient {
    async fn get_scoreboard(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        let key = create_cache_key("scoreboard", &[gender, division, date]);
        if let Some(CachedPayload::Scoreboard(cached)) = self.get_cached(&key).await {
            return Ok(cached);
        }

        let result = self.inner.get_scoreboard(gender, division, date).await?;
        self.set_cached(key, CachedPayload::Scoreboard(result.clone()))
            .await;
        Ok(result)
    }

    async fn get_schedule(
        &self,
        sport: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        let key = create_cache_key("schedule", &[sport, division, date]);
        if let Some(CachedPayload::Schedule(cached)) = self.get_cached(&key).await {
            return Ok(cached);
        }

        let result = self.inner.get_schedule(sport, division, date).await?;
        self.set_cached(key, CachedPayload::Schedule(result.clone()))
            .await;
        Ok(result)
    }

    async fn get_todays_scoreboard(
        &self,
        gender: &str,
        division: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        self.inner.get_todays_scoreboard(gender, division).await
    }

    async fn get_todays_schedule(
        &self,
        sport: &str,
        division: &str,
    ) -> Result<ScheduleResponse, AppError> {
        self.inner.get_todays_schedule(sport, division).await
    }

    async fn get_upcoming_schedules(
        &self,
        sport: &str,
        division: &str,
        days: u32,
    ) -> Result<Vec<ScheduleResponse>, AppError> {
        self.inner
            .get_upcoming_schedules(sport, division, days)
            .await
    }

    async fn clear_cache(&self) {
        let removed = {
            let mut cache = self.cache.write().await;
            let len = cache.len();
            cache.clear();
            len
        };
        info!("Cleared {removed} cached responses");
        self.inner.clear_cache().await;
    }

    async fn set_cache_duration(&self, seconds: u64) {
        info!("Cache duration set to {seconds}s");
        self.cache_duration_seconds
            .store(seconds, Ordering::Relaxed);
        self.inner.set_cache_duration(seconds).await;
    }
}
