//! Full-history command implementation.
//!
//! This module fetches the history of a wallet, classifies it and writes
//! the selected reports.

use crate::display::{BarProgress, FormatArg, write_reports};
use anyhow::{Context, Result, bail};
use huahua_lib::{
    Estimator, LcdClient, LogProgress, ProgressReporter, RunConfig, TICKER, planned_pages,
    txhistory, wallet_exists,
};
use inquire::Confirm;
use std::io::IsTerminal;
use std::path::Path;

/// Export the transaction history of a wallet.
pub(crate) async fn history(
    client: &LcdClient,
    wallet: &str,
    config: &RunConfig,
    format: FormatArg,
    output_dir: &Path,
    yes: bool,
    quiet: bool,
) -> Result<()> {
    let replay = config.debug && config.cache_manager().capture_path(wallet).exists();

    if !replay {
        if !wallet_exists(client, wallet)
            .await
            .context("Failed to look up wallet")?
        {
            bail!("Wallet {wallet} not found on chain");
        }

        if !yes && !quiet && !confirm_plan(client, wallet, config).await? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    // Without a terminal the bar is invisible, so progress goes to the log.
    let mut bar = if quiet || !std::io::stderr().is_terminal() {
        None
    } else {
        Some(BarProgress::new()?)
    };
    let mut log = LogProgress::new();
    let progress: &mut dyn ProgressReporter = match bar.as_mut() {
        Some(bar) => bar,
        None => &mut log,
    };

    let report = txhistory(client, wallet, config, progress)
        .await
        .with_context(|| format!("Failed to export history of {wallet}"))?;
    if let Some(bar) = &bar {
        bar.finish(format!(
            "Classified {} {TICKER} transactions into {} events",
            report.transactions,
            report.exporter.len()
        ));
    }

    if !report.failures.is_empty() && !quiet {
        eprintln!("{} transactions could not be classified:", report.failures.len());
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.txhash, failure.error);
        }
    }

    let written = write_reports(&report.exporter, output_dir, format.formats())?;
    if !quiet {
        for path in written {
            println!("Report written to: {}", path.display());
        }
    }

    Ok(())
}

/// Show the fetch plan and ask for confirmation.
async fn confirm_plan(client: &LcdClient, wallet: &str, config: &RunConfig) -> Result<bool> {
    let pages = planned_pages(client, wallet, config)
        .await
        .context("Failed to count transactions")?;
    let duration = Estimator::default().estimate_duration(pages);

    println!("Fetch plan:");
    println!("  Wallet: {wallet}");
    println!(
        "  Limit: {} transactions per direction",
        config.max_transactions()
    );
    println!("  Pages: {pages}");
    println!("  Estimated time: {}", Estimator::format_duration(duration));
    println!();

    Confirm::new("Proceed?")
        .with_default(true)
        .prompt()
        .context("Failed to read confirmation")
}
