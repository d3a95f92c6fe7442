//! Progress reporting for paginated fetches.
//!
//! The collector announces every page before requesting it, so a reporter
//! sees page `n` before the data for page `n` exists. Page indices are
//! 0-based and never decrease within a run. Running past the estimate is
//! allowed: estimates come from a count query taken before the fetch starts
//! and the history may grow meanwhile.

use std::time::Duration;

use crate::Estimator;

/// Receives progress notifications from the fetch pipeline.
pub trait ProgressReporter {
    /// Sets the total number of pages expected for this run.
    fn set_estimate(&mut self, total_pages: u64);

    /// Reports that page `current_page` (0-based) is about to be fetched.
    fn report(&mut self, current_page: u64, message: &str);

    /// Reports a free-text status line outside the page protocol.
    fn report_message(&mut self, text: &str);
}

/// Page counters for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    /// Highest page index reported so far.
    pub pages_completed: u64,
    /// Upper bound set once when the run starts.
    pub pages_estimated: u64,
    /// Per-page cost used for time estimates.
    pub seconds_per_page: f64,
}

impl ProgressState {
    /// Creates an empty state using the given estimator's per-page cost.
    #[must_use]
    pub const fn new(estimator: Estimator) -> Self {
        Self {
            pages_completed: 0,
            pages_estimated: 0,
            seconds_per_page: estimator.seconds_per_page(),
        }
    }

    /// Records a page index. Lower indices than already seen are ignored.
    pub fn advance(&mut self, current_page: u64) {
        self.pages_completed = self.pages_completed.max(current_page);
    }

    /// Returns completed / estimated. May exceed 1.0 when the estimate was low.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.pages_estimated == 0 {
            return 0.0;
        }
        self.pages_completed as f64 / self.pages_estimated as f64
    }

    /// Returns the estimated time left, zero once the estimate is used up.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        let pages = self.pages_estimated.saturating_sub(self.pages_completed);
        Duration::from_secs_f64(pages as f64 * self.seconds_per_page)
    }

    /// Returns the estimated duration of the whole run.
    #[must_use]
    pub fn total(&self) -> Duration {
        Duration::from_secs_f64(self.pages_estimated as f64 * self.seconds_per_page)
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(Estimator::default())
    }
}

/// Reporter that logs every notification through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LogProgress {
    state: ProgressState,
}

impl LogProgress {
    /// Creates a reporter using the default per-page cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for LogProgress {
    fn set_estimate(&mut self, total_pages: u64) {
        self.state.pages_estimated = total_pages;
        tracing::info!(
            total_pages,
            "Estimated fetch time: {}",
            Estimator::format_duration(self.state.total())
        );
    }

    fn report(&mut self, current_page: u64, message: &str) {
        self.state.advance(current_page);
        let percent = (self.state.fraction() * 100.0).round() as u64;
        tracing::info!(
            current_page,
            percent,
            remaining = %Estimator::format_duration(self.state.remaining()),
            "{message}"
        );
    }

    fn report_message(&mut self, text: &str) {
        tracing::info!("{text}");
    }
}
