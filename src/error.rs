use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Transport failures and non-2xx responses share one kind so callers can
    // tell "the request failed" apart from "the payload was bad".
    #[error("Error fetching {url}: {message}")]
    Client {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Failed to parse API response: {message} (URL: {url})")]
    ApiParse { url: String, message: String },

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a transport error for a request that never produced a response
    pub fn client_error(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Client {
            url: url.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Create a transport error from a non-success HTTP status
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown error");
        Self::Client {
            url: url.into(),
            status: Some(status),
            message: format!("HTTP {status} {reason}"),
        }
    }

    /// Create a response parsing error
    pub fn api_parse(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ApiParse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an HTML structure error
    pub fn html_parse(msg: impl Into<String>) -> Self {
        Self::HtmlParse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Maps a reqwest failure onto the transport error kind.
    pub fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::http_status(status.as_u16(), url),
            None if err.is_timeout() => Self::client_error(url, format!("request timed out: {err}")),
            None if err.is_connect() => Self::client_error(url, format!("connection failed: {err}")),
            None => Self::client_error(url, err.to_string()),
        }
    }

    /// True for transport and HTTP status failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Client { .. })
    }

    /// True for malformed JSON or HTML payloads.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, AppError::ApiParse { .. } | AppError::HtmlParse(_))
    }

    /// True when the upstream answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::Client {
                status: Some(404),
                ..
            }
        )
    }

    /// The URL the failure relates to, when there is one.
    pub fn url(&self) -> Option<&str> {
        match self {
            AppError::Client { url, .. } | AppError::ApiParse { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_helper() {
        let error = AppError::client_error("https://data.ncaa.com/x", "connection refused");
        assert!(error.is_client_error());
        assert!(!error.is_parse_error());
        assert_eq!(
            error.to_string(),
            "Error fetching https://data.ncaa.com/x: connection refused"
        );
        assert_eq!(error.url(), Some("https://data.ncaa.com/x"));
    }

    #[test]
    fn test_http_status_helper() {
        let error = AppError::http_status(500, "https://data.ncaa.com/x");
        assert!(error.is_client_error());
        assert!(!error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Error fetching https://data.ncaa.com/x: HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn test_not_found_classification() {
        let error = AppError::http_status(404, "https://data.ncaa.com/x");
        assert!(error.is_not_found());
        assert!(error.is_client_error());
    }

    #[test]
    fn test_api_parse_helper() {
        let error = AppError::api_parse("https://data.ncaa.com/x", "missing field `games`");
        assert!(error.is_parse_error());
        assert!(!error.is_client_error());
        assert_eq!(
            error.to_string(),
            "Failed to parse API response: missing field `games` (URL: https://data.ncaa.com/x)"
        );
    }

    #[test]
    fn test_html_parse_helper() {
        let error = AppError::html_parse("Could not find '.sports-nav' in the provided HTML");
        assert!(error.is_parse_error());
        assert_eq!(error.url(), None);
        assert_eq!(
            error.to_string(),
            "HTML parse error: Could not find '.sports-nav' in the provided HTML"
        );
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Sport is required. Use for_sport() to set it.");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Sport is required. Use for_sport() to set it."
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io.into();
        assert!(matches!(error, AppError::Io(_)));
        assert!(!error.is_client_error());
    }
}
