//! On-disk caches for the Chihuahua transaction history reporter.
//!
//! - [`CacheManager`] - Debug captures and the IBC label file
//! - [`CacheError`] - Path-carrying I/O and JSON errors

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod manager;

pub use manager::{
    CAPTURE_PREFIX, CacheError, CacheManager, DEFAULT_DEBUG_DIR, LABELS_FILE, Result,
};
