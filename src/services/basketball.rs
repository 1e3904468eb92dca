use std::sync::Arc;

use super::ScheduleHelper;
use crate::data_fetcher::api::today_date_string;
use crate::data_fetcher::filters::{GameFilter, LiveGameFilter};
use crate::data_fetcher::models::{GameWrapper, ScheduleResponse, ScoreboardResponse};
use crate::data_fetcher::source::DataSource;
use crate::data_fetcher::sport_names;
use crate::error::AppError;

/// Basketball scoreboards and schedules. Schedule calls take a gender and
/// address the `basketball-{gender}` slug.
#[derive(Clone)]
pub struct BasketballService {
    client: Arc<dyn DataSource>,
    schedule_helper: ScheduleHelper,
}

impl BasketballService {
    pub fn new(client: Arc<dyn DataSource>, schedule_helper: ScheduleHelper) -> Self {
        Self {
            client,
            schedule_helper,
        }
    }

    pub async fn get_scoreboard(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        self.client.get_scoreboard(gender, division, date).await
    }

    pub async fn get_todays_scoreboard(
        &self,
        gender: &str,
        division: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        self.client.get_todays_scoreboard(gender, division).await
    }

    pub async fn get_schedule(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        let sport = sport_names::basketball(gender);
        self.client.get_schedule(&sport, division, date).await
    }

    pub async fn get_todays_schedule(
        &self,
        gender: &str,
        division: &str,
    ) -> Result<ScheduleResponse, AppError> {
        let sport = sport_names::basketball(gender);
        self.client.get_todays_schedule(&sport, division).await
    }

    pub async fn get_upcoming_schedules(
        &self,
        gender: &str,
        division: &str,
        days: u32,
    ) -> Result<Vec<ScheduleResponse>, AppError> {
        let sport = sport_names::basketball(gender);
        self.client
            .get_upcoming_schedules(&sport, division, days)
            .await
    }

    /// Today's scoreboard narrowed by `filter`.
    ///
    /// Goes through the dated call with today's date, so a caching client
    /// does serve it from cache.
    pub async fn get_games_by_filter(
        &self,
        gender: &str,
        division: &str,
        filter: &dyn GameFilter,
    ) -> Result<Vec<GameWrapper>, AppError> {
        let today = today_date_string();
        let scoreboard = self.client.get_scoreboard(gender, division, &today).await?;
        Ok(filter.filter(&scoreboard.games))
    }

    pub async fn get_live_games(
        &self,
        gender: &str,
        division: &str,
    ) -> Result<Vec<GameWrapper>, AppError> {
        self.get_games_by_filter(gender, division, &LiveGameFilter)
            .await
    }

    pub async fn get_upcoming_games(
        &self,
        gender: &str,
        division: &str,
        days: u32,
    ) -> Result<Vec<GameWrapper>, AppError> {
        let schedules = self.get_upcoming_schedules(gender, division, days).await?;
        Ok(self.schedule_helper.collect_games_from_schedules(&schedules))
    }

    pub async fn clear_cache(&self) {
        self.client.clear_cache().await;
    }
}
