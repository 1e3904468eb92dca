//! URL building utilities for the casablanca endpoints

/// Builds a basketball scoreboard URL.
///
/// # Arguments
/// * `base_url` - The scoreboard base URL
/// * `gender` - `men` or `women`
/// * `division` - `d1`, `d2` or `d3`
/// * `date` - The date in YYYY/MM/DD format
///
/// # Example
/// ```
/// use ncaa_casablanca::data_fetcher::api::build_scoreboard_url;
///
/// let url = build_scoreboard_url("https://data.ncaa.com/casablanca/scoreboard", "men", "d1", "2024/03/15");
/// assert_eq!(
///     url,
///     "https://data.ncaa.com/casablanca/scoreboard/basketball-men/d1/2024/03/15/scoreboard.json"
/// );
/// ```
pub fn build_scoreboard_url(base_url: &str, gender: &str, division: &str, date: &str) -> String {
    format!("{base_url}/basketball-{gender}/{division}/{date}/scoreboard.json")
}

/// Builds a schedule URL for any sport slug (`basketball-women`, `football`, ...).
///
/// # Example
/// ```
/// use ncaa_casablanca::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("https://data.ncaa.com/casablanca/schedule", "football", "d1", "2024/09/07");
/// assert_eq!(
///     url,
///     "https://data.ncaa.com/casablanca/schedule/football/d1/2024/09/07/schedule.json"
/// );
/// ```
pub fn build_schedule_url(base_url: &str, sport: &str, division: &str, date: &str) -> String {
    format!("{base_url}/{sport}/{division}/{date}/schedule.json")
}

/// Separates the parts of a cache key. Never occurs in slugs or dates.
const CACHE_KEY_SEPARATOR: char = '\u{1f}';

/// Creates a cache key for one endpoint call from the endpoint name and its arguments.
pub fn create_cache_key(endpoint: &str, args: &[&str]) -> String {
    let mut key = String::from(endpoint);
    for arg in args {
        key.push(CACHE_KEY_SEPARATOR);
        key.push_str(arg);
    }
    key
}
