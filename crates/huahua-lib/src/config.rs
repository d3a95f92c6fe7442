//! Per-run configuration.

use std::path::PathBuf;

use huahua_cache::{CacheManager, DEFAULT_DEBUG_DIR};
use huahua_fetch::PAGE_SIZE;

/// Default cap on transactions fetched per direction.
pub const MAX_TRANSACTIONS: u64 = 10_000;

/// Options for one history run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Transactions to fetch per direction, [`MAX_TRANSACTIONS`] if unset.
    pub limit: Option<u64>,
    /// Load and persist the IBC label table.
    pub cache: bool,
    /// Replay or record a raw capture.
    pub debug: bool,
    /// Directory for raw captures.
    pub debug_dir: PathBuf,
    /// Directory for the label table, the platform data dir if unset.
    pub cache_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limit: None,
            cache: false,
            debug: false,
            debug_dir: PathBuf::from(DEFAULT_DEBUG_DIR),
            cache_dir: None,
        }
    }
}

impl RunConfig {
    /// Returns the per-direction page cap.
    #[must_use]
    pub fn max_pages(&self) -> u64 {
        max_pages(self.limit)
    }

    /// Returns the transaction cap in effect.
    #[must_use]
    pub fn max_transactions(&self) -> u64 {
        self.limit.unwrap_or(MAX_TRANSACTIONS)
    }

    /// Returns a cache manager for the configured directories.
    #[must_use]
    pub fn cache_manager(&self) -> CacheManager {
        let cache_dir = self
            .cache_dir
            .clone()
            .unwrap_or_else(CacheManager::default_path);
        CacheManager::new(self.debug_dir.clone(), cache_dir)
    }
}

/// Returns the number of pages needed to fetch `limit` transactions.
#[must_use]
pub fn max_pages(limit: Option<u64>) -> u64 {
    limit.unwrap_or(MAX_TRANSACTIONS).div_ceil(PAGE_SIZE)
}
