//! Fetch-size estimate.

use anyhow::{Context, Result};
use huahua_lib::{Estimator, LcdClient, RunConfig, count_pages, planned_pages};

/// Print the page count and expected fetch time for a wallet.
pub(crate) async fn estimate(client: &LcdClient, wallet: &str, config: &RunConfig) -> Result<()> {
    let pages = count_pages(client, wallet)
        .await
        .context("Failed to count transactions")?;
    let planned = planned_pages(client, wallet, config)
        .await
        .context("Failed to count transactions")?;
    let duration = Estimator::default().estimate_duration(planned);

    println!("Wallet: {wallet}");
    println!("  Pages: {pages}");
    if planned < pages {
        println!(
            "  Pages within limit of {} per direction: {planned}",
            config.max_transactions()
        );
    }
    println!("  Estimated time: {}", Estimator::format_duration(duration));
    Ok(())
}
