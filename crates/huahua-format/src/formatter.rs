//! Report format abstraction.

use std::io::Write;

use huahua_types::TransferEvent;
use thiserror::Error;

use crate::{CsvFormatter, CsvLayout, JsonFormatter};

/// Report format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Generic CSV with every event field.
    #[default]
    Default,
    /// Koinly universal import CSV.
    Koinly,
    /// CoinTracking import CSV.
    Cointracking,
    /// Pretty-printed JSON array.
    Json,
}

impl ReportFormat {
    /// Returns the format name used on the command line and in file names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Koinly => "koinly",
            Self::Cointracking => "cointracking",
            Self::Json => "json",
        }
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            _ => "csv",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Koinly, Self::Cointracking, Self::Json]
    }

    /// Writes `events` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write<W: Write>(&self, events: &[TransferEvent], writer: W) -> Result<(), FormatError> {
        match self {
            Self::Default => CsvFormatter::new().write_events(events, writer),
            Self::Koinly => CsvFormatter::new()
                .with_layout(CsvLayout::Koinly)
                .write_events(events, writer),
            Self::Cointracking => CsvFormatter::new()
                .with_layout(CsvLayout::Cointracking)
                .write_events(events, writer),
            Self::Json => JsonFormatter::new().with_pretty(true).write_events(events, writer),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for report writers.
pub trait Formatter: Send + Sync {
    /// Writes transfer events to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_events<W: Write>(
        &self,
        events: &[TransferEvent],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
