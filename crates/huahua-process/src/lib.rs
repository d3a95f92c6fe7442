//! Transaction classification for the Chihuahua transaction history reporter.
//!
//! - [`classify_tx`] - Derives transfer events from one raw transaction
//! - [`process_txs`] - Classifies a batch, isolating per-record failures
//! - [`DenomLabels`] - Symbol lookup for IBC voucher denoms
//! - [`Exporter`] - In-memory sink collecting the events of a run

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod classifier;
mod error;
mod exporter;
mod labels;
mod logs;
mod processor;

pub use classifier::classify_tx;
pub use error::ClassifyError;
pub use exporter::{Exporter, TransferSink};
pub use labels::{DenomLabels, collect_ibc_denoms, symbol_for_base_denom};
pub use processor::{ClassifyFailure, ProcessReport, process_tx, process_txs};
