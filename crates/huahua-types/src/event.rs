//! Normalized transfer events.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Amount;

/// Explorer URL prefix for transaction links.
pub const EXPLORER_TX_URL: &str = "https://www.mintscan.io/chihuahua/txs/";

/// Economic effect of a transfer event relative to the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
    /// Tokens received from another account.
    TransferIn,
    /// Tokens sent to another account.
    TransferOut,
    /// Tokens received over IBC.
    IbcTransferIn,
    /// Tokens sent over IBC.
    IbcTransferOut,
    /// Staking rewards withdrawn to the account.
    StakingReward,
    /// Tokens delegated to a validator.
    Delegate,
    /// Tokens undelegated from a validator.
    Undelegate,
    /// Delegation moved between validators.
    Redelegate,
    /// CosmWasm contract execution.
    ContractExecute,
    /// Governance vote.
    Vote,
    /// Transaction fee with no other effect.
    Fee,
    /// Message type the classifier does not recognize.
    Unknown,
}

impl TxType {
    /// Returns the type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TransferIn => "transfer_in",
            Self::TransferOut => "transfer_out",
            Self::IbcTransferIn => "ibc_transfer_in",
            Self::IbcTransferOut => "ibc_transfer_out",
            Self::StakingReward => "staking_reward",
            Self::Delegate => "delegate",
            Self::Undelegate => "undelegate",
            Self::Redelegate => "redelegate",
            Self::ContractExecute => "contract_execute",
            Self::Vote => "vote",
            Self::Fee => "fee",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized accounting record derived from one raw transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEvent {
    /// Block time of the originating transaction.
    pub timestamp: DateTime<Utc>,
    /// Economic effect.
    pub tx_type: TxType,
    /// Amount received by the account.
    pub received: Option<Amount>,
    /// Amount sent by the account.
    pub sent: Option<Amount>,
    /// Fee paid by the account.
    pub fee: Option<Amount>,
    /// Originating transaction hash.
    pub txid: String,
    /// Explorer link for the transaction.
    pub url: String,
    /// Other party (account, validator or contract), when there is one.
    pub counterparty: Option<String>,
    /// Free-text note.
    pub comment: String,
}

impl TransferEvent {
    /// Creates an event with no amounts attached.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, tx_type: TxType, txid: impl Into<String>) -> Self {
        let txid = txid.into();
        Self {
            timestamp,
            tx_type,
            received: None,
            sent: None,
            fee: None,
            url: format!("{EXPLORER_TX_URL}{txid}"),
            txid,
            counterparty: None,
            comment: String::new(),
        }
    }

    /// Sets the received amount.
    #[must_use]
    pub fn with_received(mut self, amount: Amount) -> Self {
        self.received = Some(amount);
        self
    }

    /// Sets the sent amount.
    #[must_use]
    pub fn with_sent(mut self, amount: Amount) -> Self {
        self.sent = Some(amount);
        self
    }

    /// Sets the fee.
    #[must_use]
    pub fn with_fee(mut self, amount: Amount) -> Self {
        self.fee = Some(amount);
        self
    }

    /// Sets the counterparty.
    #[must_use]
    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_url() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let event = TransferEvent::new(ts, TxType::TransferIn, "ABC123")
            .with_received(Amount::new(1.5, "HUAHUA"))
            .with_counterparty("chihuahua1xyz");

        assert_eq!(event.url, "https://www.mintscan.io/chihuahua/txs/ABC123");
        assert_eq!(event.received, Some(Amount::new(1.5, "HUAHUA")));
        assert!(event.sent.is_none());
        assert_eq!(event.counterparty.as_deref(), Some("chihuahua1xyz"));
    }

    #[test]
    fn test_tx_type_serde_matches_display() {
        let json = serde_json::to_string(&TxType::IbcTransferOut).unwrap();
        assert_eq!(json, format!("\"{}\"", TxType::IbcTransferOut));
    }
}
