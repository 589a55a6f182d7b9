//! Timestamp helpers shared by persisted tracker records.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Drops sub-millisecond precision so timestamps survive the persisted format unchanged.
pub fn truncate_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .duration_trunc(TimeDelta::milliseconds(1))
        .unwrap_or(timestamp)
}

/// Serde helper writing timestamps as RFC 3339 UTC with millisecond precision
/// (`2024-03-01T12:30:00.000Z`). Any RFC 3339 offset is accepted on read and
/// truncated to milliseconds, so loading then saving reproduces the stored text.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|parsed| super::truncate_to_millis(parsed.with_timezone(&Utc)))
            .map_err(|err| D::Error::custom(format!("invalid timestamp `{raw}`: {err}")))
    }
}
