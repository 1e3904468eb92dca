//! Explicit construction of the client and service graph.

use std::sync::Arc;

use crate::config::Config;
use crate::data_fetcher::api::CasablancaClient;
use crate::data_fetcher::cache::CachedClient;
use crate::data_fetcher::decorators::LoggingClient;
use crate::data_fetcher::filters::{
    CompletedGameFilter, FilterFactory, LiveGameFilter, ScheduledGameFilter,
};
use crate::data_fetcher::source::DataSource;
use crate::error::AppError;
use crate::services::{BasketballService, CasablancaService, ScheduleHelper, ScheduleService};
use crate::sports::{DefaultGenderResolver, NcaaSportsService, ReqwestHtmlFetcher};

/// Builds clients with or without the caching and logging layers.
pub struct ClientFactory;

impl ClientFactory {
    pub fn create_base_client(config: &Config) -> Result<Arc<CasablancaClient>, AppError> {
        Ok(Arc::new(CasablancaClient::from_config(config)?))
    }

    /// Base client wrapped in a cache, optionally logged on the outside.
    pub fn create_cached_client(
        config: &Config,
        with_logging: bool,
    ) -> Result<Arc<dyn DataSource>, AppError> {
        let base = Self::create_base_client(config)?;
        Ok(Self::decorate(base, config, with_logging))
    }

    /// Puts the cache, and optionally the logging layer, over an existing client.
    pub fn decorate(
        inner: Arc<dyn DataSource>,
        config: &Config,
        with_logging: bool,
    ) -> Arc<dyn DataSource> {
        let cached: Arc<dyn DataSource> =
            Arc::new(CachedClient::new(inner, config.cache_duration_seconds));
        if with_logging {
            Arc::new(LoggingClient::new(cached))
        } else {
            cached
        }
    }

    pub fn create_production_client(with_logging: bool) -> Result<Arc<dyn DataSource>, AppError> {
        Self::create_cached_client(&Config::default(), with_logging)
    }
}

/// Holds the shared clients. Services, filters and resolvers are created
/// fresh on every call.
pub struct Container {
    config: Config,
    base_client: Arc<CasablancaClient>,
    client: Arc<dyn DataSource>,
}

impl Container {
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::build(config, false)
    }

    /// Adds a logging layer over the cache.
    pub fn with_logging(config: Config) -> Result<Self, AppError> {
        Self::build(config, true)
    }

    fn build(config: Config, with_logging: bool) -> Result<Self, AppError> {
        let base_client = ClientFactory::create_base_client(&config)?;
        let client = ClientFactory::decorate(base_client.clone(), &config, with_logging);

        Ok(Self {
            config,
            base_client,
            client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Uncached client
    pub fn base_client(&self) -> Arc<CasablancaClient> {
        self.base_client.clone()
    }

    /// Shared cached client
    pub fn client(&self) -> Arc<dyn DataSource> {
        self.client.clone()
    }

    pub fn basketball_service(&self) -> BasketballService {
        BasketballService::new(self.client(), ScheduleHelper)
    }

    pub fn schedule_service(&self) -> ScheduleService {
        ScheduleService::new(self.client(), ScheduleHelper)
    }

    pub fn casablanca_service(&self) -> CasablancaService {
        CasablancaService::new(self.client())
    }

    pub fn filter_factory(&self) -> FilterFactory {
        FilterFactory::new()
    }

    pub fn live_game_filter(&self) -> LiveGameFilter {
        LiveGameFilter
    }

    pub fn completed_game_filter(&self) -> CompletedGameFilter {
        CompletedGameFilter
    }

    pub fn scheduled_game_filter(&self) -> ScheduledGameFilter {
        ScheduledGameFilter
    }

    pub fn gender_resolver(&self) -> DefaultGenderResolver {
        DefaultGenderResolver::new()
    }

    pub fn html_fetcher(&self) -> Result<ReqwestHtmlFetcher, AppError> {
        ReqwestHtmlFetcher::new(self.config.http_timeout_seconds)
    }

    pub fn ncaa_sports_service(&self) -> Result<NcaaSportsService, AppError> {
        Ok(NcaaSportsService::with_page_url(
            Arc::new(self.html_fetcher()?),
            Arc::new(self.gender_resolver()),
            self.config.sports_page_url.clone(),
        ))
    }
}
