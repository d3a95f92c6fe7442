//! Single-transaction lookup.

use anyhow::{Context, Result};
use huahua_lib::{LcdClient, txone};

/// Fetch one transaction, print it raw and as classified events.
pub(crate) async fn single(client: &LcdClient, wallet: &str, txid: &str) -> Result<()> {
    let (tx, exporter) = txone(client, wallet, txid)
        .await
        .with_context(|| format!("Failed to process transaction {txid}"))?;

    println!("{}", serde_json::to_string_pretty(&tx)?);
    println!();
    exporter.export_print()?;
    Ok(())
}
