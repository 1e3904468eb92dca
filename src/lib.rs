//! NCAA scoreboard, schedule and sports-list data access
//!
//! This library reads the public NCAA "casablanca" JSON feeds and the
//! ncaa.com sports navigation. A plain HTTP client can be wrapped in
//! caching, logging and observer layers that all share the [`DataSource`]
//! trait, and the services on top combine it with composable game filters.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ncaa_casablanca::data_fetcher::{CachedClient, CasablancaClient, DataSource};
//! use ncaa_casablanca::services::{BasketballService, ScheduleHelper};
//! use ncaa_casablanca::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let base = Arc::new(CasablancaClient::with_defaults()?);
//!     let client: Arc<dyn DataSource> = Arc::new(CachedClient::new(base, 300));
//!
//!     let service = BasketballService::new(client, ScheduleHelper);
//!     for game in service.get_live_games("men", "d1").await? {
//!         println!("{} vs {}", game.game.home.names.short, game.game.away.names.short);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod container;
pub mod data_fetcher;
pub mod error;
pub mod services;
pub mod sports;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use container::{ClientFactory, Container};
pub use data_fetcher::models::{GameState, GameWrapper, ScheduleResponse, ScoreboardResponse};
pub use data_fetcher::{CachedClient, CasablancaClient, DataSource, LoggingClient, ObservableClient};
pub use error::AppError;
pub use services::{BasketballService, CasablancaService, ScheduleService};
pub use sports::{Gender, Season, Sport};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
