//! Pipeline errors.

use huahua_cache::CacheError;
use huahua_fetch::FetchError;
use huahua_format::FormatError;
use huahua_process::ClassifyError;
use huahua_types::AddressError;
use thiserror::Error;

/// Errors that terminate a run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The wallet address is malformed.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Talking to the node failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A single-transaction lookup could not be classified.
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// A cache file could not be read or written.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// A report could not be written.
    #[error(transparent)]
    Format(#[from] FormatError),
}
