//! Core types for the Chihuahua transaction history reporter.
//!
//! This crate provides the data structures shared by every stage of the
//! pipeline:
//!
//! - [`WalletAddress`] - Validated `chihuahua1...` account address
//! - [`Direction`] - Which role the account plays in a transaction stream
//! - [`RawTransaction`] - Opaque LCD transaction record keyed by hash
//! - [`Page`] - One page of records plus the next offset cursor
//! - [`Timestamp`] - Epoch or ISO-8601 timestamp with a total ordering
//! - [`Coin`] / [`Amount`] - On-chain and display-unit token quantities
//! - [`TransferEvent`] - Normalized accounting record

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod address;
mod coin;
mod error;
mod event;
mod timestamp;
mod transaction;

pub use address::{ADDRESS_PREFIX, WalletAddress};
pub use coin::{
    Amount, Coin, IBC_PREFIX, MICRO_DECIMALS, NATIVE_DENOM, TICKER, canonical_denom,
    is_unresolved_label,
};
pub use error::{AddressError, CoinError};
pub use event::{EXPLORER_TX_URL, TransferEvent, TxType};
pub use timestamp::Timestamp;
pub use transaction::{Direction, Page, RawTransaction};
