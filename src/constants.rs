//! Application-wide constants and configuration values
//!
//! Endpoint defaults, selectors and tuning values live here so the rest of
//! the crate never hard-codes them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// How long scoreboard/schedule responses stay cached (5 minutes)
pub const DEFAULT_CACHE_DURATION_SECONDS: u64 = 300;

/// Number of days fetched by the "upcoming" helpers when unspecified
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Upper bound for the day count accepted by the query builder and the CLI
pub const MAX_UPCOMING_DAYS: u32 = 366;

/// Maximum number of responses held by the caching client
pub const RESPONSE_CACHE_CAPACITY: usize = 256;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Date format used by the casablanca endpoints (`2024/03/15`)
pub const NCAA_DATE_FORMAT: &str = "%Y/%m/%d";

/// Upstream endpoints
pub mod urls {
    /// Page whose navigation lists every NCAA sport
    pub const NCAA_BASE_URL: &str = "https://www.ncaa.com";

    pub const CASABLANCA_SCOREBOARD_BASE_URL: &str = "https://data.ncaa.com/casablanca/scoreboard";

    pub const CASABLANCA_SCHEDULE_BASE_URL: &str = "https://data.ncaa.com/casablanca/schedule";
}

/// CSS selectors for the sports navigation document
pub mod selectors {
    pub const SPORTS_NAV: &str = ".sports-nav";
    pub const SEASON: &str = ".season";
    pub const SEASON_HEADER: &str = ".season-header";
    pub const SPORT_LINK: &str = "a.sport-link, span.sport-txt";
}

/// User agent sent when fetching HTML pages
pub const HTML_USER_AGENT: &str = "Mozilla/5.0 (compatible; ncaa-scraper/1.0)";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for scoreboard base URL override
    pub const SCOREBOARD_URL: &str = "NCAA_SCOREBOARD_URL";

    /// Environment variable for schedule base URL override
    pub const SCHEDULE_URL: &str = "NCAA_SCHEDULE_URL";

    /// Environment variable for the sports page URL override
    pub const BASE_URL: &str = "NCAA_BASE_URL";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NCAA_HTTP_TIMEOUT";

    /// Environment variable for response cache duration in seconds
    pub const CACHE_DURATION: &str = "NCAA_CACHE_DURATION";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NCAA_LOG_FILE";
}
