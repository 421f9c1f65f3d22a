//! Sources module
//!
//! The remote token-issuing service behind the access token cache.

use async_trait::async_trait;

use crate::config::credentials::Credentials;
use crate::error::Result;

pub mod youzan;

pub use youzan::YouzanTokenService;

/// Token as issued by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    /// server-side expiry in epoch milliseconds, when reported
    pub expires: Option<i64>,
    pub scope: Option<String>,
}

/// Issues access tokens for a credential set.
#[async_trait]
pub trait TokenService: Send + Sync {
    async fn fetch_token(&self, credentials: &Credentials) -> Result<TokenResponse>;
}
