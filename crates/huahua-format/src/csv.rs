//! CSV output format.

use std::{borrow::Cow, io::Write};

use huahua_types::{Amount, TransferEvent, TxType};

use crate::{FormatError, Formatter};

/// Column layout of a CSV report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvLayout {
    /// Every event field, one column each.
    #[default]
    Default,
    /// Koinly universal import layout.
    Koinly,
    /// CoinTracking import layout.
    Cointracking,
}

impl CsvLayout {
    const fn header(&self) -> &'static [&'static str] {
        match self {
            Self::Default => &[
                "timestamp",
                "type",
                "received_amount",
                "received_currency",
                "sent_amount",
                "sent_currency",
                "fee_amount",
                "fee_currency",
                "counterparty",
                "comment",
                "txid",
                "url",
            ],
            Self::Koinly => &[
                "Date",
                "Sent Amount",
                "Sent Currency",
                "Received Amount",
                "Received Currency",
                "Fee Amount",
                "Fee Currency",
                "Net Worth Amount",
                "Net Worth Currency",
                "Label",
                "Description",
                "TxHash",
            ],
            Self::Cointracking => &[
                "Type",
                "Buy Amount",
                "Buy Currency",
                "Sell Amount",
                "Sell Currency",
                "Fee",
                "Fee Currency",
                "Exchange",
                "Trade-Group",
                "Comment",
                "Date",
                "Tx-ID",
            ],
        }
    }

    fn row(&self, event: &TransferEvent) -> Vec<String> {
        let (received, received_currency) = split(event.received.as_ref());
        let (sent, sent_currency) = split(event.sent.as_ref());
        let (fee, fee_currency) = split(event.fee.as_ref());

        match self {
            Self::Default => vec![
                event.timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                event.tx_type.as_str().to_string(),
                received,
                received_currency,
                sent,
                sent_currency,
                fee,
                fee_currency,
                event.counterparty.clone().unwrap_or_default(),
                event.comment.clone(),
                event.txid.clone(),
                event.url.clone(),
            ],
            Self::Koinly => vec![
                event.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                sent,
                sent_currency,
                received,
                received_currency,
                fee,
                fee_currency,
                String::new(),
                String::new(),
                koinly_label(event.tx_type).to_string(),
                event.comment.clone(),
                event.txid.clone(),
            ],
            Self::Cointracking => vec![
                cointracking_type(event).to_string(),
                received,
                received_currency,
                sent,
                sent_currency,
                fee,
                fee_currency,
                "Chihuahua".to_string(),
                String::new(),
                event.comment.clone(),
                event.timestamp.format("%d.%m.%Y %H:%M:%S").to_string(),
                event.txid.clone(),
            ],
        }
    }
}

fn split(amount: Option<&Amount>) -> (String, String) {
    amount.map_or_else(Default::default, |a| {
        (a.quantity.to_string(), a.currency.clone())
    })
}

const fn koinly_label(tx_type: TxType) -> &'static str {
    match tx_type {
        TxType::StakingReward => "reward",
        _ => "",
    }
}

fn cointracking_type(event: &TransferEvent) -> &'static str {
    match event.tx_type {
        TxType::StakingReward => "Staking",
        TxType::TransferIn | TxType::IbcTransferIn => "Deposit",
        TxType::TransferOut | TxType::IbcTransferOut => "Withdrawal",
        _ if event.sent.is_some() => "Spend",
        _ if event.received.is_some() => "Income",
        _ => "Other Fee",
    }
}

/// Field delimiter.
const DELIMITER: char = ',';

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Column layout.
    layout: CsvLayout,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with the default layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: CsvLayout::Default,
        }
    }

    /// Sets the column layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: CsvLayout) -> Self {
        self.layout = layout;
        self
    }
}

fn write_row<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|field| quote(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{line}")
}

/// Quotes a field if it contains the delimiter, a quote or a line break.
fn quote(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

impl Formatter for CsvFormatter {
    fn write_events<W: Write>(
        &self,
        events: &[TransferEvent],
        mut writer: W,
    ) -> Result<(), FormatError> {
        write_row(&mut writer, self.layout.header())?;
        for event in events {
            write_row(&mut writer, self.layout.row(event).as_slice())?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
