//! Transaction API abstraction.

use async_trait::async_trait;
use huahua_types::{AddressError, Direction, Page, RawTransaction};
use thiserror::Error;

/// Errors returned by a [`TxApi`] implementation.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Address is malformed or was rejected by the node.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Node answered with a non-success status.
    #[error("LCD returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// Response body did not have the expected shape.
    #[error("Unexpected LCD response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requested transaction does not exist.
    #[error("Transaction not found: {0}")]
    TxNotFound(String),
}

impl From<AddressError> for FetchError {
    fn from(err: AddressError) -> Self {
        Self::InvalidAddress(err.to_string())
    }
}

/// Read access to an account's transaction history.
///
/// Every call is a single request; retrying is up to the implementation.
#[async_trait]
pub trait TxApi: Send + Sync {
    /// Fetches up to `limit` records of one direction starting at `offset`.
    async fn get_txs(
        &self,
        address: &str,
        direction: Direction,
        offset: u64,
        limit: u64,
    ) -> Result<Page, FetchError>;

    /// Fetches a single transaction by hash.
    async fn get_tx(&self, txhash: &str) -> Result<RawTransaction, FetchError>;

    /// Returns the number of records in one direction.
    async fn count_txs(&self, address: &str, direction: Direction) -> Result<u64, FetchError>;

    /// Returns true if the chain knows the account.
    async fn account_exists(&self, address: &str) -> Result<bool, FetchError>;

    /// Returns the base denom behind an `ibc/<hash>` voucher, if the node knows it.
    async fn denom_trace(&self, hash: &str) -> Result<Option<String>, FetchError>;
}
