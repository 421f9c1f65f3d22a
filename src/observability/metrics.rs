use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token cache metrics
    pub token_cache_hits: IntCounter,
    pub token_cache_misses: IntCounter,
    pub token_fetch_failures: IntCounter,
    pub token_fetch_duration: HistogramVec,

    // API metrics
    pub api_calls: IntCounterVec,
    pub api_failures: IntCounterVec,
    pub api_call_duration: HistogramVec,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("youzan".into()), None)
            .expect("metric prefix is valid");

        let metrics = Arc::new(Self {
            token_cache_hits: IntCounter::new("token_cache_hits_total", "Access tokens served from cache").expect("valid metric"),
            token_cache_misses: IntCounter::new("token_cache_misses_total", "Access token cache misses").expect("valid metric"),
            token_fetch_failures: IntCounter::new("token_fetch_failures_total", "Failed access token fetches").expect("valid metric"),
            token_fetch_duration: HistogramVec::new(HistogramOpts::new("token_fetch_duration_seconds", "Token fetch duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["outcome"]).expect("valid metric"),

            api_calls: IntCounterVec::new(Opts::new("api_calls_total", "API calls by method"), &["method", "version"]).expect("valid metric"),
            api_failures: IntCounterVec::new(Opts::new("api_failures_total", "API calls failed before a response body"), &["method", "reason"]).expect("valid metric"),
            api_call_duration: HistogramVec::new(HistogramOpts::new("api_call_duration_seconds", "API call duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["method"]).expect("valid metric"),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_cache_hits.clone())).expect("unique metric");
        reg.register(Box::new(metrics.token_cache_misses.clone())).expect("unique metric");
        reg.register(Box::new(metrics.token_fetch_failures.clone())).expect("unique metric");
        reg.register(Box::new(metrics.token_fetch_duration.clone())).expect("unique metric");
        reg.register(Box::new(metrics.api_calls.clone())).expect("unique metric");
        reg.register(Box::new(metrics.api_failures.clone())).expect("unique metric");
        reg.register(Box::new(metrics.api_call_duration.clone())).expect("unique metric");

        metrics
    }

    /// Text exposition of every registered metric, for a host's `/metrics` route.
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(err) = encoder.encode(&self.registry.gather(), &mut buffer) {
            tracing::warn!("metrics encoding failed: {}", err);
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn render_exposes_prefixed_counters() {
        let metrics = get_metrics().await;
        metrics.api_calls.with_label_values(&["youzan.trade.get", "4.0.0"]).inc();

        let text = metrics.render();

        assert!(text.contains("youzan_api_calls_total"));
        assert!(text.contains("youzan.trade.get"));
    }
}
