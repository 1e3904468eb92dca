//! Fluent query builders over a [`DataSource`].
//!
//! Required fields are checked in `execute`, before any request is made.

use std::sync::Arc;

use crate::constants::MAX_UPCOMING_DAYS;
use crate::data_fetcher::api::today_date_string;
use crate::data_fetcher::models::{ScheduleResponse, ScoreboardResponse};
use crate::data_fetcher::source::DataSource;
use crate::data_fetcher::sport_names::{self, Division};
use crate::error::AppError;

pub struct ScheduleQueryBuilder {
    client: Arc<dyn DataSource>,
    sport: Option<String>,
    gender: Option<String>,
    division: String,
    date: Option<String>,
    days: u32,
}

impl ScheduleQueryBuilder {
    pub fn new(client: Arc<dyn DataSource>) -> Self {
        Self {
            client,
            sport: None,
            gender: None,
            division: Division::default().to_string(),
            date: None,
            days: 1,
        }
    }

    pub fn for_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    /// Appends `-{gender}` to the sport slug.
    pub fn for_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn in_division(mut self, division: impl Into<String>) -> Self {
        self.division = division.into();
        self
    }

    /// Ignored when more than one day is requested.
    pub fn on_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn for_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub async fn execute(self) -> Result<Vec<ScheduleResponse>, AppError> {
        let sport = match self.sport.as_deref() {
            Some(sport) if !sport.is_empty() => sport,
            _ => {
                return Err(AppError::config_error(
                    "Sport is required. Use for_sport() to set it.",
                ));
            }
        };
        if self.days < 1 {
            return Err(AppError::config_error("Days must be at least 1"));
        }
        if self.days > MAX_UPCOMING_DAYS {
            return Err(AppError::config_error(format!(
                "Days must be at most {MAX_UPCOMING_DAYS}, got {}",
                self.days
            )));
        }

        let sport = sport_names::build(sport, self.gender.as_deref());
        if self.days > 1 {
            return self
                .client
                .get_upcoming_schedules(&sport, &self.division, self.days)
                .await;
        }

        let date = self.date.unwrap_or_else(today_date_string);
        let schedule = self.client.get_schedule(&sport, &self.division, &date).await?;
        Ok(vec![schedule])
    }
}

pub struct ScoreboardQueryBuilder {
    client: Arc<dyn DataSource>,
    gender: Option<String>,
    division: String,
    date: Option<String>,
}

impl ScoreboardQueryBuilder {
    pub fn new(client: Arc<dyn DataSource>) -> Self {
        Self {
            client,
            gender: None,
            division: Division::default().to_string(),
            date: None,
        }
    }

    pub fn for_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn in_division(mut self, division: impl Into<String>) -> Self {
        self.division = division.into();
        self
    }

    pub fn on_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub async fn execute(self) -> Result<ScoreboardResponse, AppError> {
        let gender = match self.gender.as_deref() {
            Some(gender) if !gender.is_empty() => gender,
            _ => {
                return Err(AppError::config_error(
                    "Gender is required. Use for_gender() to set it.",
                ));
            }
        };

        match self.date.as_deref() {
            Some(date) => self.client.get_scoreboard(gender, &self.division, date).await,
            None => self.client.get_todays_scoreboard(gender, &self.division).await,
        }
    }
}
