use std::sync::Arc;
use tracing::info;

use super::fetcher::HtmlFetcher;
use super::gender_resolver::{DefaultGenderResolver, GenderResolver};
use super::models::{Gender, Season, Sport};
use super::parser::parse_sports;
use crate::constants::urls::NCAA_BASE_URL;
use crate::error::AppError;

/// Discovers the sports listed on the NCAA navigation page.
#[derive(Clone)]
pub struct NcaaSportsService {
    fetcher: Arc<dyn HtmlFetcher>,
    resolver: Arc<dyn GenderResolver>,
    page_url: String,
}

impl NcaaSportsService {
    pub fn new(fetcher: Arc<dyn HtmlFetcher>, resolver: Arc<dyn GenderResolver>) -> Self {
        Self::with_page_url(fetcher, resolver, NCAA_BASE_URL)
    }

    pub fn with_page_url(
        fetcher: Arc<dyn HtmlFetcher>,
        resolver: Arc<dyn GenderResolver>,
        page_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            resolver,
            page_url: page_url.into(),
        }
    }

    /// Uses the built-in gender defaults.
    pub fn with_default_resolver(fetcher: Arc<dyn HtmlFetcher>) -> Self {
        Self::new(fetcher, Arc::new(DefaultGenderResolver::new()))
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Fetch and parse errors are returned as they are.
    pub async fn get_sports(&self) -> Result<Vec<Sport>, AppError> {
        let html = self.fetcher.fetch(&self.page_url).await?;
        let sports = parse_sports(&html, &self.page_url, self.resolver.as_ref())?;
        info!("Discovered {} sports from {}", sports.len(), self.page_url);
        Ok(sports)
    }
}

/// Keeps the sports matching every filter that is set.
pub fn filter_sports(sports: Vec<Sport>, season: Option<Season>, gender: Option<Gender>) -> Vec<Sport> {
    sports
        .into_iter()
        .filter(|s| season.is_none_or(|season| s.season == season))
        .filter(|s| gender.is_none_or(|gender| s.gender == gender))
        .collect()
}

/// Season order, then name, then gender.
pub fn sort_sports(sports: &mut [Sport]) {
    sports.sort_by(|a, b| {
        a.season
            .cmp(&b.season)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.gender.cmp(&b.gender))
    });
}
