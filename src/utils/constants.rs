//! Shared constants and invariants

pub const DEFAULT_BASE_URL: &str = "https://open.youzanyun.com";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_APP_SOURCE: &str = "COMMUNITY";

/// Access tokens are kept for 7 days after they are stored
pub const TOKEN_TTL_MINUTES: i64 = 10080;

/// Upper bound accepted for a configured token TTL (one year)
pub const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

/// Prefix of every token cache key; the credential digest follows it
pub const TOKEN_CACHE_KEY_PREFIX: &str = "youzan-access-token";

pub const TOKEN_PATH: &str = "/auth/token";
pub const API_PATH: &str = "/api";

/// Datetime layout the trade APIs expect, e.g. `2024-05-01 00:00:00`
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
