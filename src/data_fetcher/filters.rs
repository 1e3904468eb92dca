//! Composable predicates over lists of games.
//!
//! Every filter keeps the input order and returns a new list; inputs are
//! never modified. [`FilterChain`] feeds the output of each filter into the
//! next one.

use std::collections::BTreeMap;

use crate::data_fetcher::models::GameWrapper;
use crate::error::AppError;

pub trait GameFilter: Send + Sync {
    fn filter(&self, games: &[GameWrapper]) -> Vec<GameWrapper>;
}

fn retain_games(games: &[GameWrapper], keep: impl Fn(&GameWrapper) -> bool) -> Vec<GameWrapper> {
    games.iter().filter(|g| keep(g)).cloned().collect()
}

/// Games in progress (`in`, `inprogress`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveGameFilter;

impl GameFilter for LiveGameFilter {
    fn filter(&self, games: &[GameWrapper]) -> Vec<GameWrapper> {
        retain_games(games, |g| g.state().is_live())
    }
}

/// Finished games (`post`, `final`)
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletedGameFilter;

impl GameFilter for CompletedGameFilter {
    fn filter(&self, games: &[GameWrapper]) -> Vec<GameWrapper> {
        retain_games(games, |g| g.state().is_completed())
    }
}

/// Games that have not started (`pre`, `scheduled`). Postponed and cancelled
/// games are not included.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduledGameFilter;

impl GameFilter for ScheduledGameFilter {
    fn filter(&self, games: &[GameWrapper]) -> Vec<GameWrapper> {
        retain_games(games, |g| g.state().is_scheduled())
    }
}

/// Case-insensitive substring match on either team's full name.
#[derive(Debug, Clone)]
pub struct TeamFilter {
    needle: String,
}

impl TeamFilter {
    pub fn new(team_name: &str) -> Self {
        Self {
            needle: team_name.to_lowercase(),
        }
    }
}

impl GameFilter for TeamFilter {
    fn filter(&self, games: &[GameWrapper]) -> Vec<GameWrapper> {
        retain_games(games, |g| {
            g.game.home.names.full.to_lowercase().contains(&self.needle)
                || g.game.away.names.full.to_lowercase().contains(&self.needle)
        })
    }
}

/// Exact match on any conference name of either team.
#[derive(Debug, Clone)]
pub struct ConferenceFilter {
    conference: String,
}

impl ConferenceFilter {
    pub fn new(conference: impl Into<String>) -> Self {
        Self {
            conference: conference.into(),
        }
    }
}

impl GameFilter for ConferenceFilter {
    fn filter(&self, games: &[GameWrapper]) -> Vec<GameWrapper> {
        retain_games(games, |g| {
            g.game.home.plays_in(&self.conference) || g.game.away.plays_in(&self.conference)
        })
    }
}

/// Ordered pipeline of filters. An empty chain returns its input unchanged.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn GameFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(mut self, filter: impl GameFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn add_boxed(mut self, filter: Box<dyn GameFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl GameFilter for FilterChain {
    fn filter(&self, games: &[GameWrapper]) -> Vec<GameWrapper> {
        let mut result = games.to_vec();
        for filter in &self.filters {
            result = filter.filter(&result);
        }
        result
    }
}

/// Parameters for the filters that need one
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub team_name: Option<String>,
    pub conference: Option<String>,
}

impl FilterOptions {
    pub fn team(name: impl Into<String>) -> Self {
        Self {
            team_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn conference(name: impl Into<String>) -> Self {
        Self {
            conference: Some(name.into()),
            ..Self::default()
        }
    }
}

type FilterConstructor = fn() -> Box<dyn GameFilter>;

/// Builds filters by name. `team` and `conference` are always available
/// and take their parameter from [`FilterOptions`].
pub struct FilterFactory {
    registry: BTreeMap<String, FilterConstructor>,
}

impl Default for FilterFactory {
    fn default() -> Self {
        let mut registry: BTreeMap<String, FilterConstructor> = BTreeMap::new();
        registry.insert("live".to_string(), || Box::new(LiveGameFilter));
        registry.insert("completed".to_string(), || Box::new(CompletedGameFilter));
        registry.insert("scheduled".to_string(), || Box::new(ScheduledGameFilter));
        Self { registry }
    }
}

impl FilterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, kind: &str, options: &FilterOptions) -> Result<Box<dyn GameFilter>, AppError> {
        match kind {
            "team" => match options.team_name.as_deref() {
                Some(name) if !name.is_empty() => Ok(Box::new(TeamFilter::new(name))),
                _ => Err(AppError::config_error("team_name is required for the team filter")),
            },
            "conference" => match options.conference.as_deref() {
                Some(name) if !name.is_empty() => Ok(Box::new(ConferenceFilter::new(name))),
                _ => Err(AppError::config_error(
                    "conference is required for the conference filter",
                )),
            },
            other => self.registry.get(other).map(|make| make()).ok_or_else(|| {
                AppError::config_error(format!(
                    "Unknown filter type: {other}. Available types: {}",
                    self.available_filters().join(", ")
                ))
            }),
        }
    }

    /// Adds or replaces a parameterless filter kind.
    pub fn register(&mut self, name: impl Into<String>, constructor: FilterConstructor) {
        self.registry.insert(name.into(), constructor);
    }

    pub fn available_filters(&self) -> Vec<String> {
        self.registry
            .keys()
            .cloned()
            .chain(["team".to_string(), "conference".to_string()])
            .collect()
    }
}
