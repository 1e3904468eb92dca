use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a contest as reported by the casablanca feed.
///
/// The feed uses two spellings for each of the first three phases
/// (`pre`/`scheduled`, `in`/`inprogress`, `post`/`final`); both are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Pre,
    In,
    Post,
    Scheduled,
    Inprogress,
    Final,
    Postponed,
    Cancelled,
}

impl GameState {
    pub fn is_live(self) -> bool {
        matches!(self, GameState::In | GameState::Inprogress)
    }

    pub fn is_completed(self) -> bool {
        matches!(self, GameState::Post | GameState::Final)
    }

    /// Not started yet. Postponed and cancelled games are a separate bucket.
    pub fn is_scheduled(self) -> bool {
        matches!(self, GameState::Pre | GameState::Scheduled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Pre => "pre",
            GameState::In => "in",
            GameState::Post => "post",
            GameState::Scheduled => "scheduled",
            GameState::Inprogress => "inprogress",
            GameState::Final => "final",
            GameState::Postponed => "postponed",
            GameState::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoState {
    Available,
    Unavailable,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamNames {
    pub char6: String,
    pub short: String,
    pub seo: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    #[serde(rename = "conferenceName")]
    pub conference_name: String,
    #[serde(rename = "conferenceSeo", default)]
    pub conference_seo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub names: TeamNames,
    pub score: i32,
    #[serde(default)]
    pub winner: Option<bool>,
    #[serde(default)]
    pub rank: Option<i32>,
    #[serde(default)]
    pub seed: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub record: Option<String>,
    #[serde(default)]
    pub conferences: Vec<Conference>,
}

impl Team {
    pub fn plays_in(&self, conference: &str) -> bool {
        self.conferences
            .iter()
            .any(|c| c.conference_name == conference)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub wind: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
    #[serde(default)]
    pub precipitation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "gameID", default)]
    pub game_id: Option<String>,
    pub url: String,
    #[serde(rename = "startTimeEpoch")]
    pub start_time_epoch: i64,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "gameState")]
    pub game_state: GameState,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendance: Option<i64>,
    #[serde(rename = "liveVideoEnabled", default)]
    pub live_video_enabled: Option<bool>,
    #[serde(rename = "videoState", default)]
    pub video_state: Option<VideoState>,
    #[serde(rename = "bracketRound", default)]
    pub bracket_round: Option<String>,
    #[serde(rename = "bracketId", default)]
    pub bracket_id: Option<String>,
    #[serde(rename = "bracketRegion", default)]
    pub bracket_region: Option<String>,
    #[serde(rename = "currentPeriod", default)]
    pub current_period: i32,
    #[serde(rename = "contestClock", default)]
    pub contest_clock: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "contestName", default)]
    pub contest_name: Option<String>,
    #[serde(rename = "finalMessage", default)]
    pub final_message: Option<String>,
    #[serde(default)]
    pub weather: Option<Weather>,
    pub home: Team,
    pub away: Team,
}

/// Envelope the upstream feed puts around every game (`{"game": {...}}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameWrapper {
    pub game: Game,
}

impl GameWrapper {
    pub fn state(&self) -> GameState {
        self.game.game_state
    }
}
