//! IBC denom labels.

use std::collections::{BTreeSet, HashMap};

use huahua_types::{Amount, Coin, IBC_PREFIX, MICRO_DECIMALS, RawTransaction, canonical_denom};
use serde_json::Value;

/// Length of the hex-encoded SHA-256 hash in an `ibc/<hash>` denom.
const IBC_HASH_LEN: usize = 64;

/// Maps `ibc/<hash>` denoms to display symbols.
///
/// Keys are stored in [`canonical_denom`] form, so lookups match regardless
/// of the case of the hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenomLabels {
    labels: HashMap<String, String>,
}

impl DenomLabels {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from previously persisted labels.
    #[must_use]
    pub fn from_map(labels: HashMap<String, String>) -> Self {
        Self {
            labels: labels
                .into_iter()
                .map(|(denom, symbol)| (canonical_denom(&denom), symbol))
                .collect(),
        }
    }

    /// Returns the underlying map by reference.
    #[must_use]
    pub const fn as_map(&self) -> &HashMap<String, String> {
        &self.labels
    }

    /// Returns the number of labels, resolved or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true if `denom` has an entry, resolved or not.
    #[must_use]
    pub fn contains(&self, denom: &str) -> bool {
        self.labels.contains_key(&canonical_denom(denom))
    }

    /// Records the label for `denom`.
    pub fn insert(&mut self, denom: &str, symbol: impl Into<String>) {
        self.labels.insert(canonical_denom(denom), symbol.into());
    }

    /// Records `denom` as not yet known.
    pub fn insert_unresolved(&mut self, denom: &str) {
        let denom = canonical_denom(denom);
        self.labels.insert(denom.clone(), denom);
    }

    /// Returns the symbol for `denom`, or `denom` itself when it is not known.
    #[must_use]
    pub fn symbol(&self, denom: &str) -> String {
        self.labels
            .get(&canonical_denom(denom))
            .cloned()
            .unwrap_or_else(|| denom.to_string())
    }

    /// Converts an on-chain coin into display units.
    ///
    /// `u`-prefixed denoms and IBC vouchers are treated as 6-decimal tokens.
    /// Anything else is reported in base units under its raw denom.
    #[must_use]
    pub fn amount(&self, coin: &Coin) -> Amount {
        let scale = 10f64.powi(MICRO_DECIMALS);
        if coin.ibc_hash().is_some() {
            return Amount::new(coin.amount as f64 / scale, self.symbol(&coin.denom));
        }
        match micro_symbol(&coin.denom) {
            Some(symbol) => Amount::new(coin.amount as f64 / scale, symbol),
            None => Amount::new(coin.amount as f64, coin.denom.clone()),
        }
    }
}

fn micro_symbol(denom: &str) -> Option<String> {
    denom
        .strip_prefix('u')
        .filter(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_uppercase)
}

/// Returns the display symbol for an IBC base denom (`uosmo` → `OSMO`).
#[must_use]
pub fn symbol_for_base_denom(base_denom: &str) -> String {
    micro_symbol(base_denom).unwrap_or_else(|| base_denom.to_uppercase())
}

/// Collects every `ibc/<hash>` denom mentioned anywhere in `records`.
#[must_use]
pub fn collect_ibc_denoms(records: &[RawTransaction]) -> BTreeSet<String> {
    let mut denoms = BTreeSet::new();
    for record in records {
        for value in record.body.values() {
            scan_value(value, &mut denoms);
        }
    }
    denoms
}

fn scan_value(value: &Value, denoms: &mut BTreeSet<String>) {
    match value {
        Value::String(s) => scan_str(s, denoms),
        Value::Array(items) => items.iter().for_each(|v| scan_value(v, denoms)),
        Value::Object(map) => map.values().for_each(|v| scan_value(v, denoms)),
        _ => {}
    }
}

fn scan_str(s: &str, denoms: &mut BTreeSet<String>) {
    for (start, _) in s.match_indices(IBC_PREFIX) {
        let hash: String = s[start + IBC_PREFIX.len()..]
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .collect();
        if hash.len() == IBC_HASH_LEN {
            denoms.insert(canonical_denom(&format!("{IBC_PREFIX}{hash}")));
        }
    }
}
