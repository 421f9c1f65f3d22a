//! Business operations over the Youzan open API.
//!
//! Every operation resolves an access token through [`TokenCache`], builds a
//! fixed method name, version and parameter map, and hands the call to the
//! injected [`ApiClient`]. Responses come back unmodified.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheStore, MemoryStore, TokenCache};
use crate::client::{ApiClient, ApiRequest, Params, YouzanApiClient};
use crate::config::types::ClientConfig;
use crate::error::{Result, YouzanError};
use crate::sources::YouzanTokenService;
use crate::utils::constants::DEFAULT_APP_SOURCE;

pub mod coupons;
pub mod customers;
pub mod salesman;
pub mod tags;
pub mod trades;

pub use trades::OrderQuery;

#[derive(Clone)]
pub struct Youzan {
    tokens: TokenCache,
    client: Arc<dyn ApiClient>,
    app_source: String,
}

impl Youzan {
    pub fn new(tokens: TokenCache, client: Arc<dyn ApiClient>) -> Self {
        Self {
            tokens,
            client,
            app_source: DEFAULT_APP_SOURCE.to_owned(),
        }
    }

    pub fn with_app_source(mut self, app_source: impl Into<String>) -> Self {
        self.app_source = app_source.into();
        self
    }

    /// Build the HTTP-backed client with a private in-memory token store.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::from_config_with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Build the HTTP-backed client over a store shared with other instances.
    pub fn from_config_with_store(config: &ClientConfig, store: Arc<dyn CacheStore>) -> Result<Self> {
        let credentials = config.youzan.credentials()?;
        let settings = &config.settings;

        let http = Client::builder()
            .timeout(StdDuration::from_millis(settings.http_timeout_ms))
            .build()
            .map_err(|e| YouzanError::Configuration(format!("cannot build http client: {}", e)))?;

        let ttl = Duration::try_minutes(settings.token_ttl_minutes).ok_or_else(|| {
            YouzanError::Configuration(format!(
                "settings.token_ttl_minutes {} is out of range",
                settings.token_ttl_minutes
            ))
        })?;

        let service = Arc::new(YouzanTokenService::new(http.clone(), &settings.base_url));
        let tokens = TokenCache::new(credentials, service, store).with_ttl(ttl);
        let client = Arc::new(YouzanApiClient::new(http, &settings.base_url));

        Ok(Self::new(tokens, client).with_app_source(config.youzan.app_source()))
    }

    pub fn token_cache(&self) -> &TokenCache {
        &self.tokens
    }

    pub fn app_source(&self) -> &str {
        &self.app_source
    }

    pub async fn get_access_token(&self) -> Result<String> {
        self.tokens.get_access_token().await
    }

    async fn call(&self, method: &str, version: &str, params: Params) -> Result<Value> {
        let token = self.tokens.get_access_token().await?;
        let request = ApiRequest::new(method, version, params);
        debug!("dispatching {} {} with keys {:?}", method, version, request.params.keys().collect::<Vec<_>>());
        self.client.post(&token, &request).await
    }
}
