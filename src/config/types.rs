use serde::Deserialize;

use crate::config::credentials::Credentials;
use crate::config::settings::SettingsConfig;
use crate::error::{Result, YouzanError};
use crate::utils::constants::DEFAULT_APP_SOURCE;

/// ================================
/// Full client configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub youzan: YouzanConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// ================================
/// Store credentials
/// ================================
/// Every field is optional at parse time so a missing key is reported
/// by name instead of as a serde error.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct YouzanConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub store_id: Option<u64>,
    pub app_source: Option<String>,
}

impl YouzanConfig {
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::new(
            required("client_id", &self.client_id)?,
            required("client_secret", &self.client_secret)?,
            self.store_id
                .ok_or_else(|| YouzanError::Configuration("youzan.store_id is missing".to_owned()))?,
        )
    }

    pub fn app_source(&self) -> String {
        self.app_source
            .as_deref()
            .filter(|source| !source.trim().is_empty())
            .unwrap_or(DEFAULT_APP_SOURCE)
            .to_owned()
    }
}

fn required(name: &str, value: &Option<String>) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| YouzanError::Configuration(format!("youzan.{} is missing", name)))
}
