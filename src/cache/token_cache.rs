use std::sync::Arc;

use chrono::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::cache::store::{remember, CacheStore};
use crate::config::credentials::Credentials;
use crate::error::{Result, YouzanError};
use crate::observability::metrics::get_metrics;
use crate::sources::TokenService;
use crate::utils::constants::TOKEN_TTL_MINUTES;

/// Read-through access token cache for one credential set.
///
/// Tokens live in a [`CacheStore`] under a key derived from the client id and
/// store id, so instances built from the same credentials share a token and
/// instances built from different ones never see each other's. A token is
/// served until its TTL elapses; there is no explicit invalidation.
#[derive(Clone)]
pub struct TokenCache {
    credentials: Credentials,
    service: Arc<dyn TokenService>,
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl TokenCache {
    pub fn new(
        credentials: Credentials,
        service: Arc<dyn TokenService>,
        store: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            credentials,
            service,
            store,
            ttl: Duration::minutes(TOKEN_TTL_MINUTES),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn cache_key(&self) -> String {
        self.credentials.cache_key()
    }

    /// Current access token, fetched from the token service on a miss.
    ///
    /// Fails with [`YouzanError::TokenFetch`] when the fetch fails; the cache
    /// is left as it was and nothing is retried.
    pub async fn get_access_token(&self) -> Result<String> {
        let metrics = get_metrics().await;
        let key = self.cache_key();
        let mut fetched = false;

        let result = remember(self.store.as_ref(), &key, self.ttl, || {
            fetched = true;
            metrics.token_cache_misses.inc();
            self.fetch()
        })
        .await;

        if !fetched && result.is_ok() {
            metrics.token_cache_hits.inc();
            debug!("access token for store {} served from cache", self.credentials.store_id());
        }
        result
    }

    async fn fetch(&self) -> Result<String> {
        let metrics = get_metrics().await;
        let start = Instant::now();
        info!("fetching access token for store {}", self.credentials.store_id());

        let result = self
            .service
            .fetch_token(&self.credentials)
            .await
            .map_err(|err| match err {
                YouzanError::TokenFetch(_) => err,
                other => YouzanError::TokenFetch(other.to_string()),
            })
            .and_then(|response| match response.access_token.is_empty() {
                true => Err(YouzanError::TokenFetch("empty access token".to_owned())),
                false => Ok(response.access_token),
            });

        let outcome = match &result {
            Ok(_) => "success",
            Err(err) => {
                warn!("access token fetch for store {} failed: {}", self.credentials.store_id(), err);
                metrics.token_fetch_failures.inc();
                "failure"
            }
        };
        metrics
            .token_fetch_duration
            .with_label_values(&[outcome])
            .observe(start.elapsed().as_secs_f64());

        result
    }
}
