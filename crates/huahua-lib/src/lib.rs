//! Library for fetching and classifying Chihuahua account transaction history.
//!
//! This is a facade crate that re-exports functionality from the huahua-tax
//! workspace crates and adds the run pipeline on top.
//!
//! # Quick Start
//!
//! ```ignore
//! use huahua_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LcdClient::with_defaults()?;
//!     let wallet = "chihuahua1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnhh5vwy";
//!
//!     let mut progress = LogProgress::new();
//!     let report = txhistory(&client, wallet, &RunConfig::default(), &mut progress).await?;
//!     report.exporter.export_print()?;
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod pipeline;

pub use config::{MAX_TRANSACTIONS, RunConfig, max_pages};
pub use error::PipelineError;
pub use pipeline::{
    HistoryReport, count_pages, estimate_duration, planned_pages, txhistory, txone, wallet_exists,
};

// Re-export core types
pub use huahua_types::*;

// Re-export fetch functionality
pub use huahua_fetch::{
    ClientConfig, Collector, FetchError, LcdClient, PAGE_SIZE, TxApi, fetch_page,
    remove_duplicates, url::DEFAULT_NODE,
};

// Re-export progress estimation
pub use huahua_estimate::{Estimator, LogProgress, ProgressReporter, ProgressState, SECONDS_PER_PAGE};

// Re-export classification
pub use huahua_process::{
    ClassifyError, ClassifyFailure, DenomLabels, Exporter, ProcessReport, TransferSink,
    classify_tx, process_tx, process_txs,
};

// Re-export formatters
pub use huahua_format::{CsvFormatter, CsvLayout, FormatError, Formatter, JsonFormatter, ReportFormat};

// Re-export caches
pub use huahua_cache::{CacheError, CacheManager, DEFAULT_DEBUG_DIR};

/// Prelude module for convenient imports.
///
/// ```
/// use huahua_lib::prelude::*;
/// ```
pub mod prelude {
    pub use huahua_types::{Direction, RawTransaction, TransferEvent, TxType, WalletAddress};

    pub use huahua_fetch::{ClientConfig, LcdClient, TxApi};

    pub use huahua_estimate::{Estimator, LogProgress, ProgressReporter};

    pub use huahua_process::{DenomLabels, Exporter};

    pub use huahua_format::{Formatter, ReportFormat};

    pub use crate::{HistoryReport, PipelineError, RunConfig, txhistory, txone};
}
