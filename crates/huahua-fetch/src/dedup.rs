//! Duplicate removal and ordering.

use std::collections::HashSet;

use huahua_types::RawTransaction;

/// Collapses duplicate transaction hashes and orders records newest first.
///
/// The first occurrence of each hash is kept, so when the input is the
/// sender stream followed by the recipient stream, sender copies win. The
/// sort is stable: records with equal timestamps keep their input order.
#[must_use]
pub fn remove_duplicates(records: Vec<RawTransaction>) -> Vec<RawTransaction> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut out: Vec<_> = records
        .into_iter()
        .filter(|record| seen.insert(record.txhash.clone()))
        .collect();

    out.sort_by(|a, b| b.timestamp.chronological_cmp(&a.timestamp));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx(txhash: &str, timestamp: i64) -> RawTransaction {
        RawTransaction::new(txhash, timestamp)
    }

    fn hashes(records: &[RawTransaction]) -> Vec<&str> {
        records.iter().map(|r| r.txhash.as_str()).collect()
    }

    fn sample() -> Vec<RawTransaction> {
        vec![
            tx("a", 100),
            tx("b", 300),
            tx("c", 200),
            tx("a", 100),
            tx("d", 300),
            tx("b", 300),
        ]
    }

    #[test]
    fn test_orders_newest_first() {
        let out = remove_duplicates(vec![tx("a", 100), tx("b", 200)]);
        assert_eq!(hashes(&out), ["b", "a"]);
    }

    #[test]
    fn test_unique_hashes() {
        let out = remove_duplicates(sample());
        let unique: HashSet<_> = out.iter().map(|r| &r.txhash).collect();
        assert_eq!(unique.len(), out.len());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_descending_timestamps() {
        let out = remove_duplicates(sample());
        for pair in out.windows(2) {
            assert!(pair[0].timestamp.chronological_cmp(&pair[1].timestamp).is_ge());
        }
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let out = remove_duplicates(sample());
        assert_eq!(hashes(&out), ["b", "d", "c", "a"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let sender = tx("A", 100).with_field("source", json!("sender"));
        let recipient = tx("A", 100).with_field("source", json!("recipient"));

        let out = remove_duplicates(vec![sender.clone(), recipient]);

        assert_eq!(out, vec![sender]);
    }

    #[test]
    fn test_idempotent() {
        let once = remove_duplicates(sample());
        let twice = remove_duplicates(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mixed_timestamp_formats() {
        let records = vec![
            RawTransaction::new("text", huahua_types::Timestamp::Text("1970-01-01T00:05:00Z".into())),
            tx("epoch", 200),
        ];
        let out = remove_duplicates(records);
        assert_eq!(hashes(&out), ["text", "epoch"]);
    }

    #[test]
    fn test_unparseable_timestamp_sorts_last() {
        let records = vec![RawTransaction::new("garbage", "yesterday"), tx("epoch", 0)];
        let out = remove_duplicates(records);
        assert_eq!(hashes(&out), ["epoch", "garbage"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(remove_duplicates(Vec::new()).is_empty());
    }
}
