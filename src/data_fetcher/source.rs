//! The client contract shared by the HTTP client and every decorator.

use async_trait::async_trait;
use tracing::warn;

use crate::data_fetcher::api::date_logic::{format_date_offset, today_date_string};
use crate::data_fetcher::models::{ScheduleResponse, ScoreboardResponse};
use crate::error::AppError;

/// Read access to scoreboards and schedules plus cache management.
///
/// Decorators implement this trait by wrapping another `DataSource`.
/// The "today" and "upcoming" methods have default implementations in terms
/// of the dated calls, so a bare client only provides those two.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn get_scoreboard(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScoreboardResponse, AppError>;

    async fn get_schedule(
        &self,
        sport: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError>;

    async fn get_todays_scoreboard(
        &self,
        gender: &str,
        division: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        let today = today_date_string();
        self.get_scoreboard(gender, division, &today).await
    }

    async fn get_todays_schedule(
        &self,
        sport: &str,
        division: &str,
    ) -> Result<ScheduleResponse, AppError> {
        let today = today_date_string();
        self.get_schedule(sport, division, &today).await
    }

    /// Schedules for today and the following `days - 1` days, fetched one by one.
    ///
    /// Best effort: a day whose request fails with a client error is left out
    /// of the result. Parse errors still propagate.
    async fn get_upcoming_schedules(
        &self,
        sport: &str,
        division: &str,
        days: u32,
    ) -> Result<Vec<ScheduleResponse>, AppError> {
        let mut schedules = Vec::new();
        for offset in 0..days {
            let date = format_date_offset(offset);
            match self.get_schedule(sport, division, &date).await {
                Ok(schedule) => schedules.push(schedule),
                Err(e) if e.is_client_error() => {
                    warn!("Skipping {sport}/{division}/{date}: {e}");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(schedules)
    }

    async fn clear_cache(&self) {}

    async fn set_cache_duration(&self, _seconds: u64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{RecordingSource, TestDataBuilder};

    #[tokio::test]
    async fn test_upcoming_with_large_day_count_and_every_day_failing_is_empty() {
        let source = RecordingSource::new(
            TestDataBuilder::create_scoreboard(vec![]),
            TestDataBuilder::create_schedule(vec![]),
        );
        source.fail_every_date();

        let schedules = source
            .get_upcoming_schedules("football", "d1", 50_000)
            .await
            .unwrap();

        assert!(schedules.is_empty());
        assert_eq!(source.call_count("schedule"), 50_000);
    }

    #[tokio::test]
    async fn test_upcoming_keeps_day_order() {
        let source = RecordingSource::new(
            TestDataBuilder::create_scoreboard(vec![]),
            TestDataBuilder::create_schedule(vec![]),
        );

        let schedules = source.get_upcoming_schedules("football", "d1", 2).await.unwrap();

        assert_eq!(schedules.len(), 2);
        assert_eq!(
            source.calls(),
            vec![
                format!("schedule:football/d1/{}", format_date_offset(0)),
                format!("schedule:football/d1/{}", format_date_offset(1)),
            ]
        );
    }
}
