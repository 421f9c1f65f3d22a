// tests/common/mod.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::cache::{CacheStore, MemoryStore, TokenCache};
use crate::client::{ApiClient, ApiRequest};
use crate::config::credentials::Credentials;
use crate::error::{Result, YouzanError};
use crate::facade::Youzan;
use crate::helpers::time::Clock;
use crate::sources::{TokenResponse, TokenService};

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn starting_now() -> Self {
        Self { now: Arc::new(Mutex::new(Utc::now())) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

enum Issue {
    Fixed(String),
    PerClient,
    Fail(YouzanError),
}

/// Token service double counting its calls.
pub struct StubTokenService {
    issue: Issue,
    delay: Option<StdDuration>,
    calls: AtomicUsize,
    seen: Mutex<Vec<Credentials>>,
}

impl StubTokenService {
    fn with_issue(issue: Issue) -> Self {
        Self { issue, delay: None, calls: AtomicUsize::new(0), seen: Mutex::new(Vec::new()) }
    }

    pub fn issuing(token: &str) -> Self {
        Self::with_issue(Issue::Fixed(token.to_owned()))
    }

    /// Issues `tok-<client_id>-<call number>`
    pub fn per_client() -> Self {
        Self::with_issue(Issue::PerClient)
    }

    pub fn failing(error: YouzanError) -> Self {
        Self::with_issue(Issue::Fail(error))
    }

    pub fn with_delay(mut self, delay: StdDuration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Credentials> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenService for StubTokenService {
    async fn fetch_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.seen.lock().unwrap().push(credentials.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let access_token = match &self.issue {
            Issue::Fixed(token) => token.clone(),
            Issue::PerClient => format!("tok-{}-{}", credentials.client_id(), call),
            Issue::Fail(YouzanError::TokenFetch(message)) => {
                return Err(YouzanError::TokenFetch(message.clone()))
            }
            Issue::Fail(other) => return Err(YouzanError::Configuration(other.to_string())),
        };

        Ok(TokenResponse { access_token, expires: None, scope: None })
    }
}

/// API client double recording every call.
pub struct RecordingApiClient {
    response: Value,
    calls: Mutex<Vec<(String, ApiRequest)>>,
}

impl RecordingApiClient {
    pub fn new() -> Self {
        Self::responding(json!({"success": true, "data": {}}))
    }

    pub fn responding(response: Value) -> Self {
        Self { response, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(String, ApiRequest)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.calls().last().map(|(_, request)| request.clone()).expect("no call recorded")
    }
}

#[async_trait]
impl ApiClient for RecordingApiClient {
    async fn post(&self, access_token: &str, request: &ApiRequest) -> Result<Value> {
        self.calls.lock().unwrap().push((access_token.to_owned(), request.clone()));
        Ok(self.response.clone())
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("a", "b", 1).unwrap()
}

pub fn token_cache(service: Arc<StubTokenService>, store: Arc<MemoryStore>) -> TokenCache {
    let store: Arc<dyn CacheStore> = store;
    TokenCache::new(credentials(), service, store)
}

/// Facade wired to doubles: `(youzan, token service, api client)`
pub fn youzan_with_doubles() -> (Youzan, Arc<StubTokenService>, Arc<RecordingApiClient>) {
    let service = Arc::new(StubTokenService::issuing("tok123"));
    let client = Arc::new(RecordingApiClient::new());
    let tokens = token_cache(service.clone(), Arc::new(MemoryStore::new()));
    (Youzan::new(tokens, client.clone()), service, client)
}
