use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::{Result, YouzanError};
use crate::utils::constants::TOKEN_CACHE_KEY_PREFIX;

/// Application credentials for one authorised store.
/// Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    store_id: u64,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        store_id: u64,
    ) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() {
            return Err(YouzanError::Configuration("client_id is empty".to_owned()));
        }
        if client_secret.trim().is_empty() {
            return Err(YouzanError::Configuration("client_secret is empty".to_owned()));
        }
        if store_id == 0 {
            return Err(YouzanError::Configuration("store_id must be positive".to_owned()));
        }

        Ok(Self { client_id, client_secret, store_id })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn store_id(&self) -> u64 {
        self.store_id
    }

    /// Cache slot for this credential set: the same client and store always
    /// map to the same key, different ones never share it.
    /// The secret is left out so rotating it keeps the cached token.
    pub fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.client_id.as_bytes());
        hasher.update(b":");
        hasher.update(self.store_id.to_string().as_bytes());
        format!("{}:{}", TOKEN_CACHE_KEY_PREFIX, hex::encode(hasher.finalize()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("store_id", &self.store_id)
            .finish()
    }
}
