//! Push-style notifications about client activity.
//!
//! [`ObservableClient`] wraps a [`DataSource`] and tells every attached
//! [`DataObserver`] about each call that succeeded. Failed calls notify nobody.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};
use tracing::info;

use crate::data_fetcher::models::{ScheduleResponse, ScoreboardResponse};
use crate::data_fetcher::source::DataSource;
use crate::error::AppError;

/// What just happened, borrowing the data the call returned.
#[derive(Debug, Clone, Copy)]
pub enum DataEvent<'a> {
    Scoreboard(&'a ScoreboardResponse),
    Schedule(&'a ScheduleResponse),
    ScoreboardToday(&'a ScoreboardResponse),
    ScheduleToday(&'a ScheduleResponse),
    SchedulesUpcoming(&'a [ScheduleResponse]),
    CacheCleared,
    CacheDurationChanged(u64),
}

impl DataEvent<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            DataEvent::Scoreboard(_) => "scoreboard",
            DataEvent::Schedule(_) => "schedule",
            DataEvent::ScoreboardToday(_) => "scoreboard_today",
            DataEvent::ScheduleToday(_) => "schedule_today",
            DataEvent::SchedulesUpcoming(_) => "schedules_upcoming",
            DataEvent::CacheCleared => "cache_cleared",
            DataEvent::CacheDurationChanged(_) => "cache_duration_changed",
        }
    }
}

impl fmt::Display for DataEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

pub trait DataObserver: Send + Sync {
    fn on_data_update(&self, event: &DataEvent<'_>);
}

pub struct ObservableClient {
    inner: Arc<dyn DataSource>,
    observers: RwLock<Vec<Arc<dyn DataObserver>>>,
}

impl ObservableClient {
    pub fn new(inner: Arc<dyn DataSource>) -> Self {
        Self {
            inner,
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Attaching the same observer twice is a no-op.
    pub fn attach(&self, observer: Arc<dyn DataObserver>) {
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        if !observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            observers.push(observer);
        }
    }

    pub fn detach(&self, observer: &Arc<dyn DataObserver>) {
        self.observers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|o| !Arc::ptr_eq(o, observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn notify(&self, event: DataEvent<'_>) {
        // Snapshot so an observer may attach or detach without deadlocking
        let observers = self
            .observers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for observer in observers {
            observer.on_data_update(&event);
        }
    }
}

#[async_trait]
impl DataSource for ObservableClient {
    async fn get_scoreboard(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        let result = self.inner.get_scoreboard(gender, division, date).await?;
        self.notify(DataEvent::Scoreboard(&result));
        Ok(result)
    }

    async fn get_schedule(
        &self,
        sport: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        let result = self.inner.get_schedule(sport, division, date).await?;
        self.notify(DataEvent::Schedule(&result));
        Ok(result)
    }

    async fn get_todays_scoreboard(
        &self,
        gender: &str,
        division: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        let result = self.inner.get_todays_scoreboard(gender, division).await?;
        self.notify(DataEvent::ScoreboardToday(&result));
        Ok(result)
    }

    async fn get_todays_schedule(
        &self,
        sport: &str,
        division: &str,
    ) -> Result<ScheduleResponse, AppError> {
        let result = self.inner.get_todays_schedule(sport, division).await?;
        self.notify(DataEvent::ScheduleToday(&result));
        Ok(result)
    }

    async fn get_upcoming_schedules(
        &self,
        sport: &str,
        division: &str,
        days: u32,
    ) -> Result<Vec<ScheduleResponse>, AppError> {
        let result = self
            .inner
            .get_upcoming_schedules(sport, division, days)
            .await?;
        self.notify(DataEvent::SchedulesUpcoming(&result));
        Ok(result)
    }

    async fn clear_cache(&self) {
        self.inner.clear_cache().await;
        self.notify(DataEvent::CacheCleared);
    }

    async fn set_cache_duration(&self, seconds: u64) {
        self.inner.set_cache_duration(seconds).await;
        self.notify(DataEvent::CacheDurationChanged(seconds));
    }
}

/// Writes one `info` line per event.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl DataObserver for LoggingObserver {
    fn on_data_update(&self, event: &DataEvent<'_>) {
        info!("Data update: {event}");
    }
}

/// Counts events per kind.
#[derive(Debug, Default)]
pub struct CacheMetricsObserver {
    requests: Mutex<HashMap<String, u64>>,
}

impl CacheMetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the counters
    pub fn metrics(&self) -> HashMap<String, u64> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn reset(&self) {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl DataObserver for CacheMetricsObserver {
    fn on_data_update(&self, event: &DataEvent<'_>) {
        *self
            .requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(event.kind().to_string())
            .or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{RecordingSource, TestDataBuilder};

    fn observable() -> (Arc<RecordingSource>, ObservableClient) {
        let source = Arc::new(RecordingSource::new(
            TestDataBuilder::create_scoreboard(vec![]),
            TestDataBuilder::create_schedule(vec![]),
        ));
        let client = ObservableClient::new(source.clone());
        (source, client)
    }

    #[tokio::test]
    async fn test_every_call_kind_is_reported() {
        let (_, client) = observable();
        let metrics = Arc::new(CacheMetricsObserver::new());
        client.attach(metrics.clone());

        client.get_scoreboard("men", "d1", "2024/03/15").await.unwrap();
        client.get_schedule("football", "d1", "2024/09/07").await.unwrap();
        client.get_todays_scoreboard("women", "d1").await.unwrap();
        client.get_todays_schedule("football", "d1").await.unwrap();
        client.get_upcoming_schedules("football", "d1", 3).await.unwrap();
        client.clear_cache().await;
        client.set_cache_duration(10).await;
        client.get_scoreboard("men", "d1", "2024/03/16").await.unwrap();

        let counts = metrics.metrics();
        assert_eq!(counts.get("scoreboard"), Some(&2));
        assert_eq!(counts.get("schedule"), Some(&1));
        assert_eq!(counts.get("scoreboard_today"), Some(&1));
        assert_eq!(counts.get("schedule_today"), Some(&1));
        // One event for the whole batch, not one per day
        assert_eq!(counts.get("schedules_upcoming"), Some(&1));
        assert_eq!(counts.get("cache_cleared"), Some(&1));
        assert_eq!(counts.get("cache_duration_changed"), Some(&1));
    }

    #[tokio::test]
    async fn test_failed_call_notifies_nobody() {
        let (source, client) = observable();
        source.fail_on_date("2024/03/15");
        let metrics = Arc::new(CacheMetricsObserver::new());
        client.attach(metrics.clone());

        assert!(client.get_scoreboard("men", "d1", "2024/03/15").await.is_err());
        assert!(metrics.metrics().is_empty());
    }

    #[tokio::test]
    async fn test_attach_is_idempotent_and_detach_stops_updates() {
        let (_, client) = observable();
        let metrics = Arc::new(CacheMetricsObserver::new());
        let as_observer: Arc<dyn DataObserver> = metrics.clone();

        client.attach(as_observer.clone());
        client.attach(as_observer.clone());
        client.attach(Arc::new(LoggingObserver));
        assert_eq!(client.observer_count(), 2);

        client.clear_cache().await;
        assert_eq!(metrics.metrics().get("cache_cleared"), Some(&1));

        client.detach(&as_observer);
        assert_eq!(client.observer_count(), 1);
        client.clear_cache().await;
        assert_eq!(metrics.metrics().get("cache_cleared"), Some(&1));
    }

    #[tokio::test]
    async fn test_cache_management_reaches_inner_before_notification() {
        let (source, client) = observable();
        client.clear_cache().await;
        client.set_cache_duration(42).await;
        assert_eq!(
            source.calls(),
            vec!["clear_cache".to_string(), "set_cache_duration:42".to_string()]
        );
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = CacheMetricsObserver::new();
        metrics.on_data_update(&DataEvent::CacheCleared);
        metrics.on_data_update(&DataEvent::CacheDurationChanged(5));
        assert_eq!(metrics.metrics().len(), 2);

        metrics.reset();
        assert!(metrics.metrics().is_empty());
    }

    #[test]
    fn test_event_kind_display() {
        let schedules: Vec<ScheduleResponse> = vec![];
        assert_eq!(
            DataEvent::SchedulesUpcoming(&schedules).to_string(),
            "schedules_upcoming"
        );
        assert_eq!(DataEvent::CacheDurationChanged(1).kind(), "cache_duration_changed");
    }
}
