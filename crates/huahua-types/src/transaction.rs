//! Raw transaction records and pagination pages.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Timestamp;

/// Which role the account plays in a transaction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Transactions the account signed (`message.sender` events).
    Sender,
    /// Transactions that paid the account (`transfer.recipient` events).
    Recipient,
}

impl Direction {
    /// Both directions in fetch order: sender first.
    pub const ALL: [Self; 2] = [Self::Sender, Self::Recipient];

    /// Returns the direction as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sender => "sender",
            Self::Recipient => "recipient",
        }
    }

    /// Returns the LCD event key used to filter this stream.
    #[must_use]
    pub const fn event_key(&self) -> &'static str {
        match self {
            Self::Sender => "message.sender",
            Self::Recipient => "transfer.recipient",
        }
    }

    /// Returns the LCD event query selecting this stream for `address`.
    #[must_use]
    pub fn event_query(&self, address: &str) -> String {
        format!("{}='{}'", self.event_key(), address)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction as returned by the LCD `tx_responses` array.
///
/// Only the hash and timestamp are interpreted here. Everything else
/// (`height`, `code`, `logs`, `tx`, ...) is kept verbatim in [`Self::body`]
/// so that records survive a debug capture round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Transaction hash, unique per chain.
    pub txhash: String,
    /// Block time of the transaction.
    pub timestamp: Timestamp,
    /// Remaining fields of the record.
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl RawTransaction {
    /// Creates a record with an empty body.
    #[must_use]
    pub fn new(txhash: impl Into<String>, timestamp: impl Into<Timestamp>) -> Self {
        Self {
            txhash: txhash.into(),
            timestamp: timestamp.into(),
            body: Map::new(),
        }
    }

    /// Adds a body field, replacing any previous value.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.body.insert(key.into(), value);
        self
    }

    /// Returns a body field by name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Returns the ABCI result code, zero meaning success.
    #[must_use]
    pub fn code(&self) -> u64 {
        self.field("code").and_then(Value::as_u64).unwrap_or(0)
    }

    /// Returns true if the transaction executed successfully.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code() == 0
    }
}

/// One page of records from a single direction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// Records on this page, in API order.
    pub records: Vec<RawTransaction>,
    /// Offset of the next page, or `None` once the stream is exhausted.
    pub next_offset: Option<u64>,
}

impl Page {
    /// Creates a page.
    #[must_use]
    pub const fn new(records: Vec<RawTransaction>, next_offset: Option<u64>) -> Self {
        Self {
            records,
            next_offset,
        }
    }
}
