pub mod api;
pub mod builders;
pub mod cache;
pub mod decorators;
pub mod filters;
pub mod models;
pub mod source;
pub mod sport_names;

pub use api::CasablancaClient;
pub use builders::{ScheduleQueryBuilder, ScoreboardQueryBuilder};
pub use cache::CachedClient;
pub use decorators::{LoggingClient, ObservableClient};
pub use filters::{FilterChain, FilterFactory, GameFilter};
pub use source::DataSource;
