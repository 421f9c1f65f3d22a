use serde::Deserialize;

use crate::utils::constants::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_MS, TOKEN_TTL_MINUTES};

/// ================================
/// Client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// lifetime of a cached access token
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
    /// applied to both the token service and API calls
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,
    pub logging: Option<LoggingConfig>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_ttl_minutes: default_token_ttl_minutes(),
            http_timeout_ms: default_http_timeout_ms(),
            logging: None,
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_ttl_minutes() -> i64 {
    TOKEN_TTL_MINUTES
}

fn default_http_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}
