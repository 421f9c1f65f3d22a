use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::cache::token::CachedToken;
use crate::error::Result;
use crate::helpers::time::{Clock, SystemClock};

/// Backing store for access tokens.
///
/// Implementations may be process-local or shared across a cluster; every
/// holder of the same store sees the same entries and the same flight guards.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Value under `key` if present and not yet expired
    async fn get(&self, key: &str) -> Option<String>;

    /// Replace the whole value under `key`, expiring `ttl` from now
    async fn put(&self, key: &str, value: String, ttl: Duration);

    /// Lock held while `key` is being refreshed
    fn flight_guard(&self, key: &str) -> Arc<Mutex<()>>;
}

/// Read-through lookup: return the cached value if current, otherwise run
/// `producer`, store its value under `key` for `ttl` and return it.
///
/// At most one producer runs per key at a time; callers that missed while a
/// refresh was in flight re-read the store once it lands. A failed producer
/// leaves the store untouched.
pub async fn remember<S, F, Fut>(store: &S, key: &str, ttl: Duration, producer: F) -> Result<String>
where
    S: CacheStore + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    if let Some(value) = store.get(key).await {
        return Ok(value);
    }

    let guard = store.flight_guard(key);
    let _single_flight = guard.lock().await;

    if let Some(value) = store.get(key).await {
        debug!("key '{}' refreshed by a concurrent caller", key);
        return Ok(value);
    }

    let value = producer().await?;
    store.put(key, value.clone(), ttl).await;
    Ok(value)
}

/// In-process store with passive expiry.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CachedToken>>,
    guards: DashMap<String, Arc<Mutex<()>>>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            guards: DashMap::new(),
            clock,
        }
    }

    /// Raw entry under `key`, expired or not
    pub async fn entry(&self, key: &str) -> Option<CachedToken> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.now();
        self.entries
            .read()
            .await
            .get(key)
            .filter(|token| token.is_current(now))
            .map(|token| token.value.clone())
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) {
        let now = self.clock.now();
        // saturates instead of overflowing on absurd ttls
        let expires_at = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entries
            .write()
            .await
            .insert(key.to_owned(), CachedToken::new(value, expires_at));
    }

    fn flight_guard(&self, key: &str) -> Arc<Mutex<()>> {
        self.guards
            .entry(key.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
