//! HTTP-backed casablanca client

use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use super::http_client::{create_http_client_with_timeout, fetch_json};
use super::urls::{build_schedule_url, build_scoreboard_url};
use crate::config::Config;
use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, urls};
use crate::data_fetcher::models::{ScheduleResponse, ScoreboardResponse};
use crate::data_fetcher::source::DataSource;
use crate::error::AppError;

/// Talks to the scoreboard and schedule endpoints. Holds no cache of its own.
#[derive(Debug, Clone)]
pub struct CasablancaClient {
    client: Client,
    scoreboard_base_url: String,
    schedule_base_url: String,
}

impl CasablancaClient {
    pub fn new(
        scoreboard_base_url: impl Into<String>,
        schedule_base_url: impl Into<String>,
        timeout_seconds: u64,
    ) -> Result<Self, AppError> {
        Ok(Self {
            client: create_http_client_with_timeout(timeout_seconds, None)?,
            scoreboard_base_url: trim_base(scoreboard_base_url.into()),
            schedule_base_url: trim_base(schedule_base_url.into()),
        })
    }

    /// Client against the public NCAA endpoints with the default timeout.
    pub fn with_defaults() -> Result<Self, AppError> {
        Self::new(
            urls::CASABLANCA_SCOREBOARD_BASE_URL,
            urls::CASABLANCA_SCHEDULE_BASE_URL,
            DEFAULT_HTTP_TIMEOUT_SECONDS,
        )
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.scoreboard_base_url.clone(),
            config.schedule_base_url.clone(),
            config.http_timeout_seconds,
        )
    }

    pub fn scoreboard_base_url(&self) -> &str {
        &self.scoreboard_base_url
    }

    pub fn schedule_base_url(&self) -> &str {
        &self.schedule_base_url
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[async_trait]
impl DataSource for CasablancaClient {
    #[instrument(skip(self))]
    async fn get_scoreboard(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        let url = build_scoreboard_url(&self.scoreboard_base_url, gender, division, date);
        fetch_json(&self.client, &url).await
    }

    #[instrument(skip(self))]
    async fn get_schedule(
        &self,
        sport: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        let url = build_schedule_url(&self.schedule_base_url, sport, division, date);
        fetch_json(&self.client, &url).await
    }
}
