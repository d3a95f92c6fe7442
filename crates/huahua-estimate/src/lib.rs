//! Page-based progress and time estimation for the Chihuahua transaction
//! history reporter.
//!
//! - [`Estimator`] - Converts page counts into wall-clock estimates
//! - [`ProgressReporter`] - Receives page and status notifications
//! - [`ProgressState`] - Monotone page counter with remaining-time arithmetic
//! - [`LogProgress`] - Reporter that emits `tracing` events

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod progress;

pub use estimator::{Estimator, SECONDS_PER_PAGE};
pub use progress::{LogProgress, ProgressReporter, ProgressState};
