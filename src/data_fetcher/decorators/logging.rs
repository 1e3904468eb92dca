use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::data_fetcher::models::{ScheduleResponse, ScoreboardResponse};
use crate::data_fetcher::source::DataSource;
use crate::error::AppError;

const DEFAULT_LABEL: &str = "casablanca";

/// Logs every call made through it, and the size of each result, at `info`.
pub struct LoggingClient {
    inner: Arc<dyn DataSource>,
    label: String,
}

impl LoggingClient {
    pub fn new(inner: Arc<dyn DataSource>) -> Self {
        Self::with_label(inner, DEFAULT_LABEL)
    }

    /// Every event carries `source = label`, so several chains can share one log.
    pub fn with_label(inner: Arc<dyn DataSource>, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[async_trait]
impl DataSource for LoggingClient {
    async fn get_scoreboard(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        info!(source = %self.label, "Fetching scoreboard: {gender}/{division}/{date}");
        let result = self.inner.get_scoreboard(gender, division, date).await?;
        info!(source = %self.label, "Fetched scoreboard with {} games", result.games.len());
        Ok(result)
    }

    async fn get_schedule(
        &self,
        sport: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        info!(source = %self.label, "Fetching schedule: {sport}/{division}/{date}");
        let result = self.inner.get_schedule(sport, division, date).await?;
        info!(source = %self.label, "Fetched schedule with {} games", result.games.len());
        Ok(result)
    }

    async fn get_todays_scoreboard(
        &self,
        gender: &str,
        division: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        info!(source = %self.label, "Fetching today's scoreboard: {gender}/{division}");
        self.inner.get_todays_scoreboard(gender, division).await
    }

    async fn get_todays_schedule(
        &self,
        sport: &str,
        division: &str,
    ) -> Result<ScheduleResponse, AppError> {
        info!(source = %self.label, "Fetching today's schedule: {sport}/{division}");
        self.inner.get_todays_schedule(sport, division).await
    }

    async fn get_upcoming_schedules(
        &self,
        sport: &str,
        division: &str,
        days: u32,
    ) -> Result<Vec<ScheduleResponse>, AppError> {
        info!(
            source = %self.label,
            "Fetching upcoming schedules: {sport}/{division} for {days} days"
        );
        let result = self
            .inner
            .get_upcoming_schedules(sport, division, days)
            .await?;
        info!(source = %self.label, "Fetched {} schedules", result.len());
        Ok(result)
    }

    async fn clear_cache(&self) {
        info!(source = %self.label, "Clearing cache");
        self.inner.clear_cache().await;
    }

    async fn set_cache_duration(&self, seconds: u64) {
        info!(source = %self.label, "Setting cache duration to {seconds} seconds");
        self.inner.set_cache_duration(seconds).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::GameState;
    use crate::testing_utils::{RecordingSource, TestDataBuilder};

    fn source() -> Arc<RecordingSource> {
        Arc::new(RecordingSource::new(
            TestDataBuilder::create_scoreboard(vec![
                TestDataBuilder::create_game("Kansas", "Baylor", GameState::In),
                TestDataBuilder::create_game("Texas", "TCU", GameState::Pre),
            ]),
            TestDataBuilder::create_schedule(vec![]),
        ))
    }

    #[tokio::test]
    async fn test_results_pass_through_unchanged() {
        let inner = source();
        let client = LoggingClient::new(inner.clone());

        let scoreboard = client.get_scoreboard("men", "d1", "2024/03/15").await.unwrap();
        assert_eq!(scoreboard.games.len(), 2);
        assert_eq!(inner.calls(), vec!["scoreboard:men/d1/2024/03/15".to_string()]);
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let inner = source();
        inner.fail_on_date("2024/03/15");
        let client = LoggingClient::with_label(inner, "test");

        let err = client.get_schedule("football", "d1", "2024/03/15").await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(client.label(), "test");
    }

    #[tokio::test]
    async fn test_cache_management_is_forwarded() {
        let inner = source();
        let client = LoggingClient::new(inner.clone());

        client.clear_cache().await;
        client.set_cache_duration(60).await;

        assert_eq!(
            inner.calls(),
            vec!["clear_cache".to_string(), "set_cache_duration:60".to_string()]
        );
    }
}
