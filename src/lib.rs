//! # Youzan Open API Client
//!
//! Maps store operations (customers, coupons, orders, salesmen, tags) onto
//! the Youzan versioned RPC endpoint, authorised by a cached access token.
//!
//! Modules:
//! - `config` — credentials, settings and YAML loading
//! - `cache` — access token cache and its backing store
//! - `sources` — the remote token-issuing service
//! - `client` — request descriptors and the HTTP transport
//! - `facade` — the business operations

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod facade;
pub mod helpers;
pub mod observability;
pub mod sources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::cache::{CacheStore, MemoryStore, TokenCache};
pub use crate::client::{ApiClient, ApiRequest, Params};
pub use crate::config::{ClientConfig, Credentials};
pub use crate::error::{Result, YouzanError};
pub use crate::facade::{OrderQuery, Youzan};
pub use crate::sources::{TokenResponse, TokenService};
