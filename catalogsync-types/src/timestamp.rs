//! Serde helpers for service timestamps.
//!
//! The catalog service encodes timestamps as epoch seconds (possibly with a
//! fractional part). Some proxies re-encode them as RFC 3339 strings, so both
//! forms are accepted on input. Output is always epoch seconds.
//!
//! Use with `#[serde(default, with = "crate::timestamp")]` on an
//! `Option<DateTime<Utc>>` field.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.serialize_f64(ts.timestamp_millis() as f64 / 1000.0),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Seconds(secs)) => {
            let millis = (secs * 1000.0).round() as i64;
            DateTime::from_timestamp_millis(millis)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {secs}")))
        }
        Some(Raw::Text(text)) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(de::Error::custom),
    }
}
