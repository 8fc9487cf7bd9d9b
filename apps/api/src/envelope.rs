//! Uniform success envelope: `{ success, message, <payload>, timestamp }`.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub payload: Option<T>,
    pub timestamp: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(message: &'static str, payload: T) -> Self {
        Self {
            success: true,
            message,
            payload: Some(payload),
            timestamp: timestamp_now(),
        }
    }
}

impl Envelope<()> {
    /// Success envelope with no payload fields.
    pub fn message_only(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            payload: None,
            timestamp: timestamp_now(),
        }
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2025-01-02T07:49:06.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
