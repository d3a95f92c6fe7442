//! LCD client, pagination and deduplication for the Chihuahua transaction
//! history reporter.
//!
//! - [`TxApi`] - Async interface to the chain's transaction API
//! - [`LcdClient`] - `TxApi` over the Cosmos SDK LCD REST gateway
//! - [`fetch_page`] - Fetches one bounded page for one direction
//! - [`Collector`] - Walks both directions up to a page cap
//! - [`remove_duplicates`] - Collapses duplicates and orders newest first

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod client;
mod collect;
mod dedup;
mod page;
pub mod url;

pub use api::{FetchError, TxApi};
pub use client::{ClientConfig, LcdClient};
pub use collect::Collector;
pub use dedup::remove_duplicates;
pub use page::{PAGE_SIZE, fetch_page};

#[cfg(test)]
mod testing;
