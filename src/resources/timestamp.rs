//! Unix timestamps as the MRPeasy API encodes them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A point in time sent by the API as unix seconds.
///
/// The API encodes timestamps as strings (`"1700000000"`); bare integers are
/// accepted too. Serializes back to the string form.
///
/// # Example
///
/// ```rust
/// use mrpeasy::resources::Timestamp;
///
/// let ts: Timestamp = serde_json::from_str(r#""1700000000""#).unwrap();
/// assert_eq!(ts.timestamp(), 1_700_000_000);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from unix seconds.
    #[must_use]
    pub fn from_unix(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    /// Returns the unix seconds.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.timestamp().to_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        let seconds = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| de::Error::custom(format!("invalid unix timestamp '{text}'")))?,
            Raw::Number(n) => n,
        };

        Self::from_unix(seconds)
            .ok_or_else(|| de::Error::custom(format!("unix timestamp {seconds} out of range")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_string_seconds() {
        let ts: Timestamp = serde_json::from_str(r#""1700000000""#).unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_deserializes_integer_seconds() {
        let ts: Timestamp = serde_json::from_str("86400").unwrap();
        assert_eq!(ts.0.to_rfc3339(), "1970-01-02T00:00:00+00:00");
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        let result: Result<Timestamp, _> = serde_json::from_str(r#""yesterday""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_string_seconds() {
        let ts = Timestamp::from_unix(42).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), r#""42""#);
    }

    #[test]
    fn test_optional_timestamp_accepts_null() {
        let ts: Option<Timestamp> = serde_json::from_str("null").unwrap();
        assert!(ts.is_none());
    }
}
