use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::credentials::Credentials;
use crate::error::{Result, YouzanError};
use crate::sources::{TokenResponse, TokenService};
use crate::utils::constants::TOKEN_PATH;

const AUTHORIZE_TYPE_SILENT: &str = "silent";

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    authorize_type: &'a str,
    grant_id: u64,
    refresh: bool,
}

/// Self-built app token endpoint (`POST /auth/token`, silent authorisation).
#[derive(Debug, Clone)]
pub struct YouzanTokenService {
    client: Client,
    token_url: String,
}

impl YouzanTokenService {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            token_url: format!("{}{}", base_url.trim_end_matches('/'), TOKEN_PATH),
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

#[async_trait]
impl TokenService for YouzanTokenService {
    async fn fetch_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
        let request = TokenRequest {
            client_id: credentials.client_id(),
            client_secret: credentials.client_secret(),
            authorize_type: AUTHORIZE_TYPE_SILENT,
            grant_id: credentials.store_id(),
            refresh: false,
        };

        debug!("requesting access token for store {}", credentials.store_id());
        let response = self
            .client
            .post(&self.token_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| YouzanError::TokenFetch(format!("token service unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("token service responded {}", status);
            return Err(YouzanError::TokenFetch(format!("token service responded {}", status)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| YouzanError::TokenFetch(format!("token response is not json: {}", e)))?;

        parse_token_response(&body)
    }
}

/// Extract the token from either the enveloped `{success, data: {...}}`
/// shape or a bare `{access_token, ...}` object.
pub fn parse_token_response(body: &Value) -> Result<TokenResponse> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no message");
        let code = body.get("code").map(Value::to_string).unwrap_or_default();
        return Err(YouzanError::TokenFetch(format!("token request rejected ({}): {}", code, message)));
    }

    let payload = body.get("data").filter(|data| data.is_object()).unwrap_or(body);

    let access_token = payload
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| YouzanError::TokenFetch("token response has no access_token".to_owned()))?;

    Ok(TokenResponse {
        access_token: access_token.to_owned(),
        expires: payload.get("expires").and_then(Value::as_i64),
        scope: payload.get("scope").and_then(Value::as_str).map(str::to_owned),
    })
}
