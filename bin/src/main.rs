//! huahua CLI - Chihuahua (HUAHUA) transaction history reporter.

use anyhow::{Context, Result};
use clap::Parser;
use huahua_lib::{ClientConfig, DEFAULT_DEBUG_DIR, DEFAULT_NODE, LcdClient, RunConfig};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod display;

use display::FormatArg;

#[derive(Parser)]
#[command(name = "huahua")]
#[command(about = "Export the transaction history of a Chihuahua wallet", long_about = None)]
#[command(version)]
struct Cli {
    /// Wallet address (chihuahua1...)
    wallet: String,

    /// Classify a single transaction instead of the full history
    #[arg(long)]
    txid: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "default")]
    format: FormatArg,

    /// Maximum transactions fetched per direction (default 10000)
    #[arg(short, long)]
    limit: Option<u64>,

    /// Load and persist resolved IBC denom labels
    #[arg(long)]
    cache: bool,

    /// Replay the raw capture if present, otherwise record one
    #[arg(long)]
    debug: bool,

    /// Directory for raw captures
    #[arg(long, default_value = DEFAULT_DEBUG_DIR)]
    debug_dir: PathBuf,

    /// Directory for the IBC label cache
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// LCD node base URL
    #[arg(long, default_value = DEFAULT_NODE)]
    node: String,

    /// Directory for written reports
    #[arg(short, long, default_value = DEFAULT_DEBUG_DIR)]
    output_dir: PathBuf,

    /// Print the page count and estimated duration, then exit
    #[arg(long)]
    estimate: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            limit: self.limit,
            cache: self.cache,
            debug: self.debug,
            debug_dir: self.debug_dir.clone(),
            cache_dir: self.cache_dir.clone(),
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    let client = LcdClient::new(ClientConfig {
        node: cli.node.clone(),
        ..Default::default()
    })
    .context("Failed to build HTTP client")?;

    if let Some(txid) = &cli.txid {
        return commands::single::single(&client, &cli.wallet, txid).await;
    }

    if cli.estimate {
        return commands::estimate::estimate(&client, &cli.wallet, &cli.run_config()).await;
    }

    commands::history::history(
        &client,
        &cli.wallet,
        &cli.run_config(),
        cli.format,
        &cli.output_dir,
        cli.yes,
        cli.quiet,
    )
    .await
}
