//! Batch classification with per-record failure isolation.

use huahua_types::RawTransaction;
use tracing::{debug, warn};

use crate::{ClassifyError, DenomLabels, TransferSink, classify_tx};

/// A record that could not be classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyFailure {
    /// Hash of the offending record.
    pub txhash: String,
    /// Why classification failed.
    pub error: ClassifyError,
}

/// Outcome of classifying a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Records classified successfully.
    pub processed: usize,
    /// Events pushed to the sink.
    pub events: usize,
    /// Records that were skipped.
    pub failures: Vec<ClassifyFailure>,
}

impl ProcessReport {
    /// Returns true if every record was classified.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Classifies one transaction and pushes its events to `sink`.
///
/// Nothing is pushed when classification fails.
///
/// # Errors
///
/// Returns the classification error of the record.
pub fn process_tx<S: TransferSink + ?Sized>(
    wallet: &str,
    tx: &RawTransaction,
    labels: &DenomLabels,
    sink: &mut S,
) -> Result<usize, ClassifyError> {
    let events = classify_tx(wallet, tx, labels)?;
    let count = events.len();
    for event in events {
        sink.push(event);
    }
    debug!(txhash = %tx.txhash, events = count, "Classified transaction");
    Ok(count)
}

/// Classifies every record, skipping the ones that fail.
///
/// A failing record is logged and recorded in the report. The remaining
/// records are still processed in order.
pub fn process_txs<S: TransferSink + ?Sized>(
    wallet: &str,
    txs: &[RawTransaction],
    labels: &DenomLabels,
    sink: &mut S,
) -> ProcessReport {
    let mut report = ProcessReport::default();
    for tx in txs {
        match process_tx(wallet, tx, labels, sink) {
            Ok(count) => {
                report.processed += 1;
                report.events += count;
            }
            Err(error) => {
                warn!(txhash = %tx.txhash, %error, "Skipping transaction");
                report.failures.push(ClassifyFailure {
                    txhash: tx.txhash.clone(),
                    error,
                });
            }
        }
    }
    report
}
