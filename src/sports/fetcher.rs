use async_trait::async_trait;
use reqwest::Client;

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, HTML_USER_AGENT};
use crate::data_fetcher::api::{create_http_client_with_timeout, fetch_text};
use crate::error::AppError;

#[async_trait]
pub trait HtmlFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, AppError>;
}

/// Fetches pages with a browser-like user agent.
#[derive(Debug, Clone)]
pub struct ReqwestHtmlFetcher {
    client: Client,
}

impl ReqwestHtmlFetcher {
    pub fn new(timeout_seconds: u64) -> Result<Self, AppError> {
        Ok(Self {
            client: create_http_client_with_timeout(timeout_seconds, Some(HTML_USER_AGENT))?,
        })
    }

    pub fn with_default_timeout() -> Result<Self, AppError> {
        Self::new(DEFAULT_HTTP_TIMEOUT_SECONDS)
    }
}

#[async_trait]
impl HtmlFetcher for ReqwestHtmlFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        fetch_text(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", HTML_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = ReqwestHtmlFetcher::new(5).unwrap();
        let body = fetcher.fetch(&format!("{}/", mock_server.uri())).await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_maps_status_to_client_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let fetcher = ReqwestHtmlFetcher::with_default_timeout().unwrap();
        let err = fetcher.fetch(&mock_server.uri()).await.unwrap_err();
        assert!(err.is_client_error());
        assert!(!err.is_not_found());
    }
}
