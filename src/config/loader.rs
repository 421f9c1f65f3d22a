use std::path::Path;

use regex::Regex;
use tracing::{debug, error};

use crate::config::settings::{LoggingConfig, SettingsConfig};
use crate::config::types::ClientConfig;
use crate::error::{Result, YouzanError};
use crate::utils::constants::MAX_TOKEN_TTL_MINUTES;

/// Load and validate config from YAML file
pub async fn file_to_config(path: &Path) -> Result<ClientConfig> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        YouzanError::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&expand_env_vars(&content))
}

pub fn parse_config(content: &str) -> Result<ClientConfig> {
    let mut client_config: ClientConfig = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse config error: {}", e))
        .map_err(|e| YouzanError::Configuration(format!("invalid config format: {}", e)))?;

    // Apply defaults
    if client_config.settings.logging.is_none() {
        client_config.settings.logging = Some(LoggingConfig::default());
    }

    debug!("validating config ...");
    validate(&client_config)?;

    Ok(client_config)
}

fn validate(client_config: &ClientConfig) -> Result<()> {
    // surfaces missing credential keys at load rather than at first call
    client_config.youzan.credentials()?;
    validate_settings(&client_config.settings)
}

fn validate_settings(settings: &SettingsConfig) -> Result<()> {
    if !settings.base_url.starts_with("http://") && !settings.base_url.starts_with("https://") {
        return Err(YouzanError::Configuration(format!(
            "settings.base_url '{}' is not an http(s) url",
            settings.base_url
        )));
    }
    if settings.token_ttl_minutes <= 0 || settings.token_ttl_minutes > MAX_TOKEN_TTL_MINUTES {
        return Err(YouzanError::Configuration(format!(
            "settings.token_ttl_minutes must be between 1 and {}",
            MAX_TOKEN_TTL_MINUTES
        )));
    }
    if settings.http_timeout_ms == 0 {
        return Err(YouzanError::Configuration(
            "settings.http_timeout_ms must be positive".to_owned(),
        ));
    }
    Ok(())
}

/// Replaces `${VAR}` and `${VAR:default}` with the environment value.
pub fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("env var pattern is valid");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
