use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::data_fetcher::models::{
    Conference, Game, GameState, GameWrapper, ScheduleResponse, ScoreboardResponse, Team,
    TeamNames,
};
use crate::data_fetcher::source::DataSource;
use crate::error::AppError;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a team with the given full name and no conferences
    pub fn create_team(full_name: &str, score: i32) -> Team {
        let seo = full_name.to_lowercase().replace(' ', "-");
        Team {
            names: TeamNames {
                char6: full_name.chars().take(6).collect::<String>().to_uppercase(),
                short: full_name.to_string(),
                seo,
                full: full_name.to_string(),
            },
            score,
            winner: None,
            rank: None,
            seed: None,
            description: None,
            record: None,
            conferences: vec![],
        }
    }

    /// Creates a team that belongs to one conference
    pub fn create_conference_team(full_name: &str, conference: &str) -> Team {
        let mut team = Self::create_team(full_name, 0);
        team.conferences.push(Conference {
            conference_name: conference.to_string(),
            conference_seo: Some(conference.to_lowercase()),
        });
        team
    }

    /// Creates a basic game between two teams in the given state
    pub fn create_game(home_team: &str, away_team: &str, state: GameState) -> GameWrapper {
        Self::create_game_with_teams(
            Self::create_team(home_team, 0),
            Self::create_team(away_team, 0),
            state,
        )
    }

    /// Creates a game from fully built teams
    pub fn create_game_with_teams(home: Team, away: Team, state: GameState) -> GameWrapper {
        GameWrapper {
            game: Game {
                game_id: Some(format!("{}-{}", home.names.seo, away.names.seo)),
                url: format!("/game/{}-{}", home.names.seo, away.names.seo),
                start_time_epoch: 1_710_532_800,
                start_time: Some("07:00PM ET".to_string()),
                start_date: Some("03-15-2024".to_string()),
                game_state: state,
                network: None,
                venue: None,
                location: None,
                attendance: None,
                live_video_enabled: None,
                video_state: None,
                bracket_round: None,
                bracket_id: None,
                bracket_region: None,
                current_period: 0,
                contest_clock: None,
                title: None,
                contest_name: None,
                final_message: None,
                weather: None,
                home,
                away,
            },
        }
    }

    /// One game in every lifecycle state, in declaration order
    pub fn create_games_in_every_state() -> Vec<GameWrapper> {
        [
            GameState::Pre,
            GameState::In,
            GameState::Post,
            GameState::Scheduled,
            GameState::Inprogress,
            GameState::Final,
            GameState::Postponed,
            GameState::Cancelled,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, state)| {
            Self::create_game(&format!("Home {i}"), &format!("Away {i}"), state)
        })
        .collect()
    }

    pub fn create_scoreboard(games: Vec<GameWrapper>) -> ScoreboardResponse {
        ScoreboardResponse { games }
    }

    pub fn create_schedule(games: Vec<GameWrapper>) -> ScheduleResponse {
        ScheduleResponse {
            games,
            ..ScheduleResponse::default()
        }
    }
}

/// In-memory `DataSource` that records every call it receives.
///
/// Calls are recorded as `"<method>:<arg>/<arg>/..."`. Dated calls whose
/// date was registered with [`RecordingSource::fail_on_date`] return a client
/// error. The "today"/"upcoming" methods use the trait defaults, so they show
/// up as the dated calls they expand to.
#[derive(Debug, Default)]
pub struct RecordingSource {
    scoreboard: ScoreboardResponse,
    schedule: ScheduleResponse,
    failing_dates: Mutex<HashSet<String>>,
    fail_every_date: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl RecordingSource {
    pub fn new(scoreboard: ScoreboardResponse, schedule: ScheduleResponse) -> Self {
        Self {
            scoreboard,
            schedule,
            ..Self::default()
        }
    }

    pub fn fail_on_date(&self, date: &str) {
        self.failing_dates
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(date.to_string());
    }

    /// Makes every dated call fail with a client error
    pub fn fail_every_date(&self) {
        self.fail_every_date.store(true, Ordering::Relaxed);
    }

    /// Every recorded call, oldest first
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of recorded calls whose method name is `method`
    pub fn call_count(&self, method: &str) -> usize {
        let prefix = format!("{method}:");
        self.calls()
            .iter()
            .filter(|c| c.starts_with(&prefix) || c.as_str() == method)
            .count()
    }

    fn record(&self, call: String) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    fn check_date(&self, url: &str, date: &str) -> Result<(), AppError> {
        let failing = self.fail_every_date.load(Ordering::Relaxed)
            || self
                .failing_dates
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .contains(date);
        if failing {
            Err(AppError::client_error(url, "simulated transport failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DataSource for RecordingSource {
    async fn get_scoreboard(
        &self,
        gender: &str,
        division: &str,
        date: &str,
    ) -> Result<ScoreboardResponse, AppError> {
        let call = format!("scoreboard:{gender}/{division}/{date}");
        self.record(call.clone());
        self.check_date(&call, date)?;
        Ok(self.scoreboard.clone())
    }

    async fn get_schedule(
        &self,
        sport: &str,
        division: &str,
        date: &str,
    ) -> Result<ScheduleResponse, AppError> {
        let call = format!("schedule:{sport}/{division}/{date}");
        self.record(call.clone());
        self.check_date(&call, date)?;
        Ok(self.schedule.clone())
    }

    async fn clear_cache(&self) {
        self.record("clear_cache".to_string());
    }

    async fn set_cache_duration(&self, seconds: u64) {
        self.record(format!("set_cache_duration:{seconds}"));
    }
}
