use chrono::{DateTime, Utc};

/// A cached access token and the moment it stops being served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
