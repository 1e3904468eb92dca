use crate::constants::{self, env_vars, urls};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing endpoint and cache settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the casablanca scoreboard endpoints.
    #[serde(default = "default_scoreboard_base_url")]
    pub scoreboard_base_url: String,
    /// Base URL of the casablanca schedule endpoints.
    #[serde(default = "default_schedule_base_url")]
    pub schedule_base_url: String,
    /// Page whose navigation lists the NCAA sports.
    #[serde(default = "default_sports_page_url")]
    pub sports_page_url: String,
    /// HTTP timeout in seconds for every request.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// How long scoreboard and schedule responses are reused.
    #[serde(default = "default_cache_duration")]
    pub cache_duration_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_scoreboard_base_url() -> String {
    urls::CASABLANCA_SCOREBOARD_BASE_URL.to_string()
}

fn default_schedule_base_url() -> String {
    urls::CASABLANCA_SCHEDULE_BASE_URL.to_string()
}

fn default_sports_page_url() -> String {
    urls::NCAA_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_cache_duration() -> u64 {
    constants::DEFAULT_CACHE_DURATION_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scoreboard_base_url: default_scoreboard_base_url(),
            schedule_base_url: default_schedule_base_url(),
            sports_page_url: default_sports_page_url(),
            http_timeout_seconds: default_http_timeout(),
            cache_duration_seconds: default_cache_duration(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `NCAA_SCOREBOARD_URL` - Override scoreboard base URL
    /// - `NCAA_SCHEDULE_URL` - Override schedule base URL
    /// - `NCAA_BASE_URL` - Override the sports page URL
    /// - `NCAA_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `NCAA_CACHE_DURATION` - Override cache duration in seconds
    /// - `NCAA_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        Self::load_or_default(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reads from an explicit path.
    pub async fn load_or_default(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::SCOREBOARD_URL) {
            self.scoreboard_base_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::SCHEDULE_URL) {
            self.schedule_base_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::BASE_URL) {
            self.sports_page_url = url;
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(duration) = std::env::var(env_vars::CACHE_DURATION)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.cache_duration_seconds = duration;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &[
                ("scoreboard_base_url", &self.scoreboard_base_url),
                ("schedule_base_url", &self.schedule_base_url),
                ("sports_page_url", &self.sports_page_url),
            ],
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Scoreboard URL:");
        println!("{}", config.scoreboard_base_url);
        println!("Schedule URL:");
        println!("{}", config.schedule_base_url);
        println!("Sports Page URL:");
        println!("{}", config.sports_page_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("Cache Duration:");
        println!("{} seconds", config.cache_duration_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/ncaa_casablanca.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized with #[serial]
        unsafe {
            for var in [
                env_vars::SCOREBOARD_URL,
                env_vars::SCHEDULE_URL,
                env_vars::BASE_URL,
                env_vars::HTTP_TIMEOUT,
                env_vars::CACHE_DURATION,
                env_vars::LOG_FILE,
            ] {
                std::env::remove_var(var);
            }
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
scoreboard_base_url = "https://scores.example.com"
http_timeout_seconds = 3
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.scoreboard_base_url, "https://scores.example.com");
        assert_eq!(config.http_timeout_seconds, 3);
        // Omitted fields fall back to defaults
        assert_eq!(
            config.schedule_base_url,
            urls::CASABLANCA_SCHEDULE_BASE_URL
        );
        assert_eq!(
            config.cache_duration_seconds,
            constants::DEFAULT_CACHE_DURATION_SECONDS
        );
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_save_and_reload() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            cache_duration_seconds: 60,
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("cache_duration_seconds = 60"));

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_uses_defaults() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        let config = Config::load_or_default(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_take_precedence() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "http_timeout_seconds = 5\n")
            .await
            .unwrap();

        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var(env_vars::SCOREBOARD_URL, "http://localhost:9000/scoreboard");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "2");
            std::env::set_var(env_vars::CACHE_DURATION, "not-a-number");
        }

        let config = Config::load_or_default(&config_path.to_string_lossy())
            .await
            .unwrap();
        clear_env();

        assert_eq!(config.scoreboard_base_url, "http://localhost:9000/scoreboard");
        assert_eq!(config.http_timeout_seconds, 2);
        // Unparseable overrides are ignored
        assert_eq!(
            config.cache_duration_seconds,
            constants::DEFAULT_CACHE_DURATION_SECONDS
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_env_url_fails_validation() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var(env_vars::SCHEDULE_URL, "ftp://nope");
        }
        let result = Config::load_or_default(&config_path.to_string_lossy()).await;
        clear_env();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_malformed_toml_is_reported() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "http_timeout_seconds = \"ten\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }
}
