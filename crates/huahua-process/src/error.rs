//! Classification errors.

use huahua_types::CoinError;
use thiserror::Error;

/// Reasons a transaction could not be classified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A field the transaction shape requires is absent.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A message carries no `@type`.
    #[error("Message {index} has no @type")]
    MissingType {
        /// Position of the message in `tx.body.messages`.
        index: usize,
    },

    /// A coin amount could not be parsed.
    #[error(transparent)]
    Coin(#[from] CoinError),

    /// The timestamp is neither RFC 3339 nor epoch seconds.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
