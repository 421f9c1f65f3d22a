use chrono::{DateTime, Duration, Local, NaiveDateTime, Utc};

use crate::utils::constants::DATETIME_FORMAT;

/// Source of "now" for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Default creation window for order queries: from the start of yesterday
/// to the start of today, both in local time.
pub fn default_created_range() -> (String, String) {
    created_range_for(Local::now().naive_local())
}

pub fn created_range_for(now: NaiveDateTime) -> (String, String) {
    let today = now.date().and_hms_opt(0, 0, 0).unwrap_or(now);
    let yesterday = today - Duration::days(1);
    (format_datetime(&yesterday), format_datetime(&today))
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}
