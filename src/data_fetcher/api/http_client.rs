//! HTTP client creation and the shared GET helpers

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Creates an HTTP client with connection pooling and a per-request timeout.
///
/// # Arguments
/// * `timeout_seconds` - Applied to every request made through the client
/// * `user_agent` - Optional User-Agent header value
pub fn create_http_client_with_timeout(
    timeout_seconds: u64,
    user_agent: Option<&str>,
) -> Result<Client, AppError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST);

    if let Some(agent) = user_agent {
        builder = builder.user_agent(agent);
    }

    builder
        .build()
        .map_err(|e| AppError::config_error(format!("Failed to build HTTP client: {e}")))
}

/// GETs `url` and returns the body of a successful response.
///
/// Transport failures and non-2xx statuses become `AppError::Client`.
/// No retries are attempted.
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        AppError::from_reqwest(url, &e)
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!("HTTP {} (URL: {})", status.as_u16(), url);
        return Err(AppError::http_status(status.as_u16(), url));
    }

    let text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::from_reqwest(url, &e)
    })?;
    debug!("Response length: {} bytes", text.len());

    Ok(text)
}

/// GETs `url` and deserializes the JSON body into `T`.
///
/// A body that does not match `T` is reported as `AppError::ApiParse`;
/// no partially parsed value is ever returned.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let text = fetch_text(client, url).await?;

    serde_json::from_str::<T>(&text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            text.chars().take(200).collect::<String>()
        );
        if text.trim().is_empty() {
            AppError::api_parse(url, "Response body is empty")
        } else {
            AppError::api_parse(url, e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::ScoreboardResponse;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    fn test_client() -> Client {
        create_http_client_with_timeout(5, Some("ncaa-test/1.0")).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_json_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scoreboard.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"games": []}"#))
            .mount(&mock_server)
            .await;

        let url = format!("{}/scoreboard.json", mock_server.uri());
        let result: ScoreboardResponse = fetch_json(&test_client(), &url).await.unwrap();
        assert!(result.games.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_text_sends_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "ncaa-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = fetch_text(&test_client(), &mock_server.uri()).await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_server_error_maps_to_client_error_with_url() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let url = format!("{}/schedule.json", mock_server.uri());
        let err = fetch_text(&test_client(), &url).await.unwrap_err();
        match err {
            AppError::Client { url: failed, status, .. } => {
                assert_eq!(failed, url);
                assert_eq!(status, Some(503));
            }
            other => panic!("expected client error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_maps_to_parse_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
            .mount(&mock_server)
            .await;

        let err = fetch_json::<ScoreboardResponse>(&test_client(), &mock_server.uri())
            .await
            .unwrap_err();
        assert!(err.is_parse_error());
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_connection_refused_is_client_error() {
        // Nothing listens on port 9 of the loopback interface
        let err = fetch_text(&test_client(), "http://127.0.0.1:9/scoreboard.json")
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.url(), Some("http://127.0.0.1:9/scoreboard.json"));
    }
}
