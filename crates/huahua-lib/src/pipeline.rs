//! End-to-end history and single-transaction runs.

use std::time::Duration;

use huahua_estimate::{Estimator, ProgressReporter};
use huahua_fetch::{Collector, FetchError, PAGE_SIZE, TxApi, remove_duplicates};
use huahua_process::{
    ClassifyFailure, DenomLabels, Exporter, collect_ibc_denoms, process_tx, process_txs,
    symbol_for_base_denom,
};
use huahua_types::{Direction, IBC_PREFIX, RawTransaction, TICKER, WalletAddress};
use tracing::{debug, info, warn};

use crate::{PipelineError, RunConfig};

/// Result of a history run.
#[derive(Debug)]
pub struct HistoryReport {
    /// Classified events.
    pub exporter: Exporter,
    /// Unique transactions processed.
    pub transactions: usize,
    /// Records that could not be classified.
    pub failures: Vec<ClassifyFailure>,
}

/// Returns the number of pages a full history fetch would take.
///
/// # Errors
///
/// Returns an error if either count query fails.
pub async fn count_pages<A: TxApi + ?Sized>(api: &A, wallet: &str) -> Result<u64, FetchError> {
    page_estimate(api, wallet, u64::MAX).await
}

/// Returns the number of pages a history run with `config` will fetch.
///
/// # Errors
///
/// Returns an error if either count query fails.
pub async fn planned_pages<A: TxApi + ?Sized>(
    api: &A,
    wallet: &str,
    config: &RunConfig,
) -> Result<u64, FetchError> {
    page_estimate(api, wallet, config.max_pages()).await
}

/// Returns the expected wall-clock time of a full history fetch.
///
/// # Errors
///
/// Returns an error if either count query fails.
pub async fn estimate_duration<A: TxApi + ?Sized>(
    api: &A,
    wallet: &str,
) -> Result<Duration, FetchError> {
    let pages = count_pages(api, wallet).await?;
    Ok(Estimator::default().estimate_duration(pages))
}

/// Returns true if the chain knows `wallet`.
///
/// # Errors
///
/// Returns an error if the address is malformed or the query fails.
pub async fn wallet_exists<A: TxApi + ?Sized>(api: &A, wallet: &str) -> Result<bool, PipelineError> {
    let address = WalletAddress::parse(wallet)?;
    Ok(api.account_exists(address.as_str()).await?)
}

/// Fetches and classifies the full history of `wallet`.
///
/// Records that fail classification are skipped and listed in the report.
///
/// # Errors
///
/// Returns an error if the address is malformed, a fetch fails, or a cache
/// file cannot be read or written.
pub async fn txhistory<A, P>(
    api: &A,
    wallet: &str,
    config: &RunConfig,
    progress: &mut P,
) -> Result<HistoryReport, PipelineError>
where
    A: TxApi + ?Sized,
    P: ProgressReporter + ?Sized,
{
    let address = WalletAddress::parse(wallet)?;
    let cache = config.cache_manager();

    let mut labels = if config.cache {
        DenomLabels::from_map(cache.load_labels()?)
    } else {
        DenomLabels::new()
    };

    let replay = if config.debug {
        cache.load_capture(address.as_str())?
    } else {
        None
    };
    let replaying = replay.is_some();

    let records = if let Some(records) = replay {
        info!(records = records.len(), "Replaying debug capture");
        records
    } else {
        let records = fetch_history(api, address.as_str(), config, progress).await?;
        if config.debug {
            cache.save_capture(address.as_str(), &records)?;
        }
        records
    };

    let records = remove_duplicates(records);
    progress.report_message(&format!(
        "Processing {} {TICKER} transactions... ",
        records.len()
    ));

    if replaying {
        mark_unresolved(&records, &mut labels);
    } else {
        resolve_labels(api, &records, &mut labels).await;
    }
    debug!(labels = labels.len(), "IBC labels ready");

    let mut exporter = Exporter::new(address.as_str());
    let report = process_txs(address.as_str(), &records, &labels, &mut exporter);
    info!(
        transactions = report.processed,
        events = report.events,
        failures = report.failures.len(),
        "Classified history"
    );

    if config.cache {
        cache.save_labels(labels.as_map())?;
    }

    Ok(HistoryReport {
        exporter,
        transactions: records.len(),
        failures: report.failures,
    })
}

/// Fetches and classifies a single transaction.
///
/// # Errors
///
/// Returns an error if the address is malformed, the transaction cannot be
/// fetched, or it cannot be classified.
pub async fn txone<A: TxApi + ?Sized>(
    api: &A,
    wallet: &str,
    txid: &str,
) -> Result<(RawTransaction, Exporter), PipelineError> {
    let address = WalletAddress::parse(wallet)?;
    let tx = api.get_tx(txid).await?;

    let mut labels = DenomLabels::new();
    resolve_labels(api, std::slice::from_ref(&tx), &mut labels).await;

    let mut exporter = Exporter::new(address.as_str());
    process_tx(address.as_str(), &tx, &labels, &mut exporter)?;
    Ok((tx, exporter))
}

async fn fetch_history<A, P>(
    api: &A,
    wallet: &str,
    config: &RunConfig,
    progress: &mut P,
) -> Result<Vec<RawTransaction>, FetchError>
where
    A: TxApi + ?Sized,
    P: ProgressReporter + ?Sized,
{
    let max_pages = config.max_pages();
    info!(
        max_transactions = config.max_transactions(),
        max_pages, "Fetching transaction history"
    );

    let pages = page_estimate(api, wallet, max_pages).await?;
    progress.set_estimate(pages);

    Collector::new(api, max_pages)
        .collect(wallet, pages, progress)
        .await
}

/// Sums the pages of both directions, each capped at `max_pages`.
async fn page_estimate<A: TxApi + ?Sized>(
    api: &A,
    wallet: &str,
    max_pages: u64,
) -> Result<u64, FetchError> {
    let mut pages = 0;
    for direction in Direction::ALL {
        let count = api.count_txs(wallet, direction).await?;
        debug!(%direction, count, "Counted transactions");
        pages += count.div_ceil(PAGE_SIZE).min(max_pages);
    }
    Ok(pages)
}

/// Looks up every `ibc/<hash>` denom in `records` that `labels` lacks.
///
/// Denoms the node cannot trace are stored unresolved.
async fn resolve_labels<A: TxApi + ?Sized>(
    api: &A,
    records: &[RawTransaction],
    labels: &mut DenomLabels,
) {
    for denom in collect_ibc_denoms(records) {
        if labels.contains(&denom) {
            continue;
        }
        let hash = denom.trim_start_matches(IBC_PREFIX);
        match api.denom_trace(hash).await {
            Ok(Some(base_denom)) => {
                let symbol = symbol_for_base_denom(&base_denom);
                debug!(%denom, %symbol, "Resolved IBC denom");
                labels.insert(&denom, symbol);
            }
            Ok(None) => {
                debug!(%denom, "Unknown IBC denom");
                labels.insert_unresolved(&denom);
            }
            Err(error) => {
                warn!(%denom, %error, "Failed to resolve IBC denom");
                labels.insert_unresolved(&denom);
            }
        }
    }
}

/// Records every `ibc/<hash>` denom in `records` that `labels` lacks as not
/// yet known, without asking the node.
fn mark_unresolved(records: &[RawTransaction], labels: &mut DenomLabels) {
    for denom in collect_ibc_denoms(records) {
        if !labels.contains(&denom) {
            debug!(%denom, "IBC denom not in label cache");
            labels.insert_unresolved(&denom);
        }
    }
}
