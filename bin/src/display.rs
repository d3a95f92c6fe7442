//! Display utilities and report writing for the huahua CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use huahua_lib::{Estimator, Exporter, ProgressReporter, ProgressState, ReportFormat, TICKER};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Report format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Default,
    Koinly,
    Cointracking,
    Json,
    All,
}

impl FormatArg {
    /// Returns the report formats to write.
    pub(crate) const fn formats(&self) -> &'static [ReportFormat] {
        match self {
            Self::Default => &[ReportFormat::Default],
            Self::Koinly => &[ReportFormat::Koinly],
            Self::Cointracking => &[ReportFormat::Cointracking],
            Self::Json => &[ReportFormat::Json],
            Self::All => ReportFormat::all(),
        }
    }
}

/// Returns `<dir>/HUAHUA.<wallet>.<format>.<ext>`.
pub(crate) fn report_path(dir: &Path, wallet: &str, format: ReportFormat) -> PathBuf {
    dir.join(format!(
        "{TICKER}.{wallet}.{}.{}",
        format.as_str(),
        format.extension()
    ))
}

/// Write one report per format and return the written paths.
pub(crate) fn write_reports(
    exporter: &Exporter,
    dir: &Path,
    formats: &[ReportFormat],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(formats.len());
    for &format in formats {
        let path = report_path(dir, exporter.wallet(), format);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        format
            .write(exporter.events(), BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Progress bar over fetched pages.
pub(crate) struct BarProgress {
    bar: ProgressBar,
    state: ProgressState,
}

impl BarProgress {
    /// Create a progress bar on stderr.
    pub(crate) fn new() -> Result<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages {msg}",
            )
            .context("Invalid progress template")?
            .progress_chars("=>-"),
        );
        Ok(Self {
            bar,
            state: ProgressState::new(Estimator::default()),
        })
    }

    /// Finish the bar with a closing message.
    pub(crate) fn finish(&self, message: String) {
        self.bar.finish_with_message(message);
    }
}

impl ProgressReporter for BarProgress {
    fn set_estimate(&mut self, total_pages: u64) {
        self.state.pages_estimated = total_pages;
        self.bar.set_length(total_pages);
    }

    fn report(&mut self, current_page: u64, message: &str) {
        self.state.advance(current_page);
        self.bar.set_position(current_page);
        self.bar.set_message(format!(
            "{message} (~{} left)",
            Estimator::format_duration(self.state.remaining())
        ));
    }

    fn report_message(&mut self, text: &str) {
        self.bar.println(text);
    }
}
