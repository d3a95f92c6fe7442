//! Fetch duration estimation.

use std::time::Duration;

/// Measured average wall-clock time to fetch one LCD page.
pub const SECONDS_PER_PAGE: f64 = 4.0;

/// Page-count based duration estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimator {
    seconds_per_page: f64,
}

impl Estimator {
    /// Creates an estimator with a custom per-page cost.
    #[must_use]
    pub const fn new(seconds_per_page: f64) -> Self {
        Self { seconds_per_page }
    }

    /// Returns the per-page cost in seconds.
    #[must_use]
    pub const fn seconds_per_page(&self) -> f64 {
        self.seconds_per_page
    }

    /// Estimates the wall-clock time needed to fetch `pages` pages.
    #[must_use]
    pub fn estimate_duration(&self, pages: u64) -> Duration {
        Duration::from_secs_f64(pages as f64 * self.seconds_per_page)
    }

    /// Formats duration in human-readable form (e.g., "2h 30m", "45m").
    #[must_use]
    pub fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            if minutes > 0 {
                format!("{hours}h {minutes}m")
            } else {
                format!("{hours}h")
            }
        } else if minutes > 0 {
            if seconds > 0 && minutes < 10 {
                format!("{minutes}m {seconds}s")
            } else {
                format!("{minutes}m")
            }
        } else {
            format!("{seconds}s")
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(SECONDS_PER_PAGE)
    }
}
