use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::client::{ApiClient, ApiRequest};
use crate::error::{Result, YouzanError};
use crate::observability::metrics::get_metrics;
use crate::utils::constants::API_PATH;

static TRANSPORT_MSG: &str = "transport";
static STATUS_MSG: &str = "status";
static BODY_MSG: &str = "body";

/// `POST {base}/api/{method}/{version}?access_token=...` with the params as
/// the JSON body.
#[derive(Debug, Clone)]
pub struct YouzanApiClient {
    client: Client,
    api_url: String,
}

impl YouzanApiClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            api_url: format!("{}{}", base_url.trim_end_matches('/'), API_PATH),
        }
    }

    pub fn endpoint(&self, request: &ApiRequest) -> String {
        format!("{}/{}/{}", self.api_url, request.method, request.version)
    }
}

#[async_trait]
impl ApiClient for YouzanApiClient {
    async fn post(&self, access_token: &str, request: &ApiRequest) -> Result<Value> {
        let metrics = get_metrics().await;
        let start = Instant::now();
        let method = request.method.as_str();
        metrics.api_calls.with_label_values(&[method, request.version.as_str()]).inc();

        let observe = || {
            metrics
                .api_call_duration
                .with_label_values(&[method])
                .observe(start.elapsed().as_secs_f64());
        };

        let upstream = |reason: &str, message: String| {
            warn!("{} {} failed: {}", method, request.version, message);
            metrics.api_failures.with_label_values(&[method, reason]).inc();
            observe();
            YouzanError::UpstreamApi {
                method: request.method.clone(),
                version: request.version.clone(),
                message,
            }
        };

        debug!("calling {} {}", method, request.version);
        let response = self
            .client
            .post(self.endpoint(request))
            .query(&[("access_token", access_token)])
            .json(&request.params)
            .send()
            .await
            .map_err(|e| upstream(TRANSPORT_MSG, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream(STATUS_MSG, format!("HTTP {}: {}", status, body)));
        }

        let body = response.json::<Value>().await;
        match body {
            Ok(body) => {
                observe();
                Ok(body)
            }
            Err(e) => Err(upstream(BODY_MSG, e.to_string())),
        }
    }
}
