use thiserror::Error;

/// Failures surfaced by the client. Nothing here is recovered locally:
/// every variant reaches the immediate caller.
#[derive(Error, Debug)]
pub enum YouzanError {
    /// A required credential or setting is missing or empty
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The token service was unreachable, rejected the credentials,
    /// or answered without an access token
    #[error("Token fetch failed: {0}")]
    TokenFetch(String),

    /// The API call itself failed before a response body was produced
    #[error("Youzan API error: {method}/{version}: {message}")]
    UpstreamApi {
        method: String,
        version: String,
        message: String,
    },
}

impl YouzanError {
    pub fn is_token_fetch(&self) -> bool {
        matches!(self, YouzanError::TokenFetch(_))
    }
}

pub type Result<T> = std::result::Result<T, YouzanError>;
