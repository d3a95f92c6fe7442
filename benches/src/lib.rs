//! Synthetic transaction histories for benchmarking the offline stages.

use huahua_lib::RawTransaction;
use serde_json::json;

/// Account that every synthetic record involves.
pub const WALLET: &str = "chihuahua1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnhh5vwy";

const COUNTERPARTY: &str = "chihuahua1zg69v7yszg69v7yszg69v7yszg69v7ys8xdv96";

/// Builds `count` send records alternating between incoming and outgoing,
/// one minute apart, oldest first.
pub fn synthetic_history(count: usize) -> Vec<RawTransaction> {
    (0..count)
        .map(|i| {
            let (from, to) = if i % 2 == 0 {
                (COUNTERPARTY, WALLET)
            } else {
                (WALLET, COUNTERPARTY)
            };
            RawTransaction::new(format!("{i:064X}"), 1_677_628_800 + i as i64 * 60)
                .with_field("code", json!(0))
                .with_field(
                    "tx",
                    json!({
                        "body": {"messages": [{
                            "@type": "/cosmos.bank.v1beta1.MsgSend",
                            "from_address": from,
                            "to_address": to,
                            "amount": [{"denom": "uhuahua", "amount": (i as u64 + 1) * 1_000}]
                        }]},
                        "auth_info": {"fee": {"amount": [{"denom": "uhuahua", "amount": "5000"}]}}
                    }),
                )
        })
        .collect()
}

/// Returns `records` with every record repeated, as the two direction
/// streams report self-involving transactions twice.
pub fn with_duplicates(records: &[RawTransaction]) -> Vec<RawTransaction> {
    records.iter().chain(records).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use huahua_lib::{DenomLabels, TransferEvent, process_txs, remove_duplicates};

    #[test]
    fn test_synthetic_history_classifies_cleanly() {
        let records = synthetic_history(10);
        let mut events: Vec<TransferEvent> = Vec::new();

        let report = process_txs(WALLET, &records, &DenomLabels::new(), &mut events);

        assert!(report.is_clean());
        assert_eq!(events.len(), 10);
    }

    #[test]
    fn test_duplicates_collapse() {
        let records = synthetic_history(10);
        assert_eq!(remove_duplicates(with_duplicates(&records)).len(), 10);
    }
}
