pub mod basketball;
pub mod casablanca;
pub mod schedule;

pub use basketball::BasketballService;
pub use casablanca::CasablancaService;
pub use schedule::ScheduleService;

use crate::data_fetcher::models::{GameWrapper, ScheduleResponse};

/// Merges schedule responses into one game list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleHelper;

impl ScheduleHelper {
    /// Concatenates in schedule order, then game order. No dedup, no sort.
    pub fn collect_games_from_schedules(&self, schedules: &[ScheduleResponse]) -> Vec<GameWrapper> {
        schedules
            .iter()
            .flat_map(|schedule| schedule.games.iter().cloned())
            .collect()
    }
}
