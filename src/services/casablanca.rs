use std::sync::Arc;

use super::{BasketballService, ScheduleHelper, ScheduleService};
use crate::data_fetcher::models::ScoreboardResponse;
use crate::data_fetcher::source::DataSource;
use crate::error::AppError;

/// Both services over one shared client.
#[derive(Clone)]
pub struct CasablancaService {
    client: Arc<dyn DataSource>,
    pub basketball: BasketballService,
    pub schedule: ScheduleService,
}

impl CasablancaService {
    pub fn new(client: Arc<dyn DataSource>) -> Self {
        let schedule_helper = ScheduleHelper;
        Self {
            basketball: BasketballService::new(client.clone(), schedule_helper),
            schedule: ScheduleService::new(client.clone(), schedule_helper),
            client,
        }
    }

    pub async fn get_basketball_scoreboard(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        self.basketball.get_scoreboard(gender, division, date).await
    }

    pub async fn get_todays_basketball_games(
        &self,
        gender: &str,
        division: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        self.basketball.get_todays_scoreboard(gender, division).await
    }

    /// Clears the shared client once; both services see the effect.
    pub async fn clear_cache(&self) {
        self.client.clear_cache().await;
    }
}
