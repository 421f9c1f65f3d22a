//! Transport for the versioned RPC endpoint.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub mod http;
pub mod request;

pub use http::YouzanApiClient;
pub use request::{ApiRequest, Params};

/// Sends one API call authorised by `access_token` and returns the response
/// body as received. Error-shaped payloads are not inspected.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn post(&self, access_token: &str, request: &ApiRequest) -> Result<Value>;
}
