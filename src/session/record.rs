use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One login: who, and when (milliseconds since the Unix epoch).
///
/// The wire format is the JSON object `{"username": string, "loginTime":
/// number}`. Only `loginTime` is required on read; a record missing
/// `username` still parses, with an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub username: String,
    #[serde(rename = "loginTime")]
    pub login_time: i64,
}

impl SessionRecord {
    pub fn new(username: impl Into<String>, login_time: i64) -> Self {
        Self {
            username: username.into(),
            login_time,
        }
    }

    /// Milliseconds since login, as seen at `now_ms`.
    pub fn elapsed_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.login_time
    }

    /// True once the record has outlived `window_ms`. The boundary instant
    /// itself is still valid: expiry requires elapsed time to strictly
    /// exceed the window.
    pub fn is_expired(&self, now_ms: i64, window_ms: i64) -> bool {
        self.elapsed_ms(now_ms) > window_ms
    }

    /// Milliseconds of validity left at `now_ms`; zero or negative once
    /// the window is used up.
    pub fn remaining_ms(&self, now_ms: i64, window_ms: i64) -> i64 {
        window_ms - self.elapsed_ms(now_ms)
    }

    /// Login instant as a UTC timestamp, if representable.
    pub fn login_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.login_time)
    }
}
