// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.
//!
//! Activities carry a single timestamp without an offset. Remote payloads
//! may include fractional seconds and a `Z` suffix; both are accepted on
//! input and dropped by [`truncate_to_seconds`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Wire format for activity timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Form format for the date half of a timestamp.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Form format for the time half of a timestamp (fraction printed only when non-zero).
pub const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// Parse a timestamp as sent by the activities service.
///
/// Accepts RFC3339 with an offset (converted to UTC), or a bare local
/// timestamp with optional fractional seconds and optional seconds.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Format a timestamp in the canonical wire format.
pub fn format_timestamp(date: NaiveDateTime) -> String {
    date.format(TIMESTAMP_FORMAT).to_string()
}

/// Drop everything below whole seconds.
pub fn truncate_to_seconds(date: NaiveDateTime) -> NaiveDateTime {
    date.with_nanosecond(0).unwrap_or(date)
}

/// Split a timestamp into the form's date and time strings.
pub fn split_timestamp(date: NaiveDateTime) -> (String, String) {
    (
        date.format(DATE_FORMAT).to_string(),
        date.format(TIME_FORMAT).to_string(),
    )
}

/// Parse the form's date field.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse the form's time field. Seconds are optional, as browsers omit them.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Serde adapter for activity timestamps.
pub mod serde_timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}
