pub mod game;
pub mod responses;

pub use game::{Conference, Game, GameState, GameWrapper, Team, TeamNames, VideoState, Weather};
pub use responses::{ScheduleResponse, ScoreboardResponse};
