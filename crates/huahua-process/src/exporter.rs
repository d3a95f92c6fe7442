//! Output sinks for transfer events.

use std::io::{self, Write};

use huahua_types::{Amount, TransferEvent};

/// Receives transfer events as they are classified.
pub trait TransferSink {
    /// Appends one event.
    fn push(&mut self, event: TransferEvent);
}

impl TransferSink for Vec<TransferEvent> {
    fn push(&mut self, event: TransferEvent) {
        Vec::push(self, event);
    }
}

/// Collects the events of one run for the report writers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exporter {
    wallet: String,
    events: Vec<TransferEvent>,
}

impl Exporter {
    /// Creates an empty exporter for `wallet`.
    #[must_use]
    pub fn new(wallet: impl Into<String>) -> Self {
        Self {
            wallet: wallet.into(),
            events: Vec::new(),
        }
    }

    /// Returns the wallet the events belong to.
    #[must_use]
    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    /// Returns the collected events in insertion order.
    #[must_use]
    pub fn events(&self) -> &[TransferEvent] {
        &self.events
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Writes the events as a plain-text table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_table<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            "{:<20} {:<17} {:>24} {:>24} {:>18}  txid",
            "timestamp", "type", "received", "sent", "fee"
        )?;
        for event in &self.events {
            writeln!(
                writer,
                "{:<20} {:<17} {:>24} {:>24} {:>18}  {}",
                event.timestamp.format("%Y-%m-%d %H:%M:%S"),
                event.tx_type.as_str(),
                cell(event.received.as_ref()),
                cell(event.sent.as_ref()),
                cell(event.fee.as_ref()),
                event.txid
            )?;
        }
        Ok(())
    }

    /// Prints the event table to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn export_print(&self) -> io::Result<()> {
        self.write_table(io::stdout().lock())
    }
}

impl TransferSink for Exporter {
    fn push(&mut self, event: TransferEvent) {
        self.events.push(event);
    }
}

fn cell(amount: Option<&Amount>) -> String {
    amount.map(ToString::to_string).unwrap_or_default()
}
