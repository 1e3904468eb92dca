use std::sync::Arc;

use super::ScheduleHelper;
use crate::data_fetcher::models::{GameWrapper, ScheduleResponse};
use crate::data_fetcher::source::DataSource;
use crate::data_fetcher::sport_names;
use crate::error::AppError;

/// Schedules for any sport slug, plus football and soccer shortcuts.
#[derive(Clone)]
pub struct ScheduleService {
    client: Arc<dyn DataSource>,
    schedule_helper: ScheduleHelper,
}

impl ScheduleService {
    pub fn new(client: Arc<dyn DataSource>, schedule_helper: ScheduleHelper) -> Self {
        Self {
            client,
            schedule_helper,
        }
    }

    pub async fn get_schedule(
        &self,
        sport: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        self.client.get_schedule(sport, division, date).await
    }

    pub async fn get_todays_schedule(
        &self,
        sport: &str,
        division: &str,
    ) -> Result<ScheduleResponse, AppError> {
        self.client.get_todays_schedule(sport, division).await
    }

    pub async fn get_upcoming_schedules(
        &self,
        sport: &str,
        division: &str,
        days: u32,
    ) -> Result<Vec<ScheduleResponse>, AppError> {
        self.client
            .get_upcoming_schedules(sport, division, days)
            .await
    }

    pub async fn get_upcoming_games(
        &self,
        sport: &str,
        division: &str,
        days: u32,
    ) -> Result<Vec<GameWrapper>, AppError> {
        let schedules = self.get_upcoming_schedules(sport, division, days).await?;
        Ok(self.schedule_helper.collect_games_from_schedules(&schedules))
    }

    pub async fn get_football_schedule(
        &self,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        self.get_schedule(&sport_names::football(), division, date)
            .await
    }

    pub async fn get_soccer_schedule(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        self.get_schedule(&sport_names::soccer(gender), division, date)
            .await
    }

    pub async fn clear_cache(&self) {
        self.client.clear_cache().await;
    }
}
