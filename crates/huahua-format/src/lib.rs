//! Report writers for the Chihuahua transaction history reporter.
//!
//! - [`CsvFormatter`] - CSV in the default, Koinly or CoinTracking layout
//! - [`JsonFormatter`] - Compact or pretty JSON array

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::{CsvFormatter, CsvLayout};
pub use formatter::{FormatError, Formatter, ReportFormat};
pub use json::JsonFormatter;
