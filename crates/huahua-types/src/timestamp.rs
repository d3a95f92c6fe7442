//! Transaction timestamps.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp carried by a raw transaction.
///
/// The LCD returns RFC 3339 strings, but captured or hand-written records
/// may carry epoch seconds instead. Both forms round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Seconds since the Unix epoch.
    Epoch(i64),
    /// ISO-8601 / RFC 3339 text.
    Text(String),
}

impl Timestamp {
    /// Returns the instant this timestamp denotes, if it can be interpreted.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Epoch(secs) => DateTime::from_timestamp(*secs, 0),
            Self::Text(text) => parse_text(text),
        }
    }

    /// Compares two timestamps chronologically.
    ///
    /// Interpretable timestamps compare by instant. Uninterpretable ones sort
    /// before every interpretable one and compare by their raw text.
    #[must_use]
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    text.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epoch(secs) => write!(f, "{secs}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self::Epoch(secs)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Text(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}
