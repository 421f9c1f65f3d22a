use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Parameter map of one API call. Optional values are only inserted when
/// present, so an absent argument never shows up as a `null` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    pub fn with_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Versioned RPC call: method name and API version are passed through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub method: String,
    pub version: String,
    pub params: Params,
}

impl ApiRequest {
    pub fn new(method: &str, version: &str, params: Params) -> Self {
        Self {
            method: method.to_owned(),
            version: version.to_owned(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_values_are_skipped_when_absent() {
        let params = Params::new()
            .with("page", 1)
            .with_opt("created_at_start", None::<i64>);

        assert!(!params.contains_key("created_at_start"));
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"page": 1}));
    }

    #[test]
    fn optional_values_are_kept_when_present() {
        let params = Params::new().with_opt("status", Some("WAIT_SELLER_SEND_GOODS"));
        assert_eq!(params.get("status"), Some(&json!("WAIT_SELLER_SEND_GOODS")));
    }
}
