//! On-chain coins and display amounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CoinError;

/// Ticker of the native token.
pub const TICKER: &str = "HUAHUA";

/// Base denom of the native token.
pub const NATIVE_DENOM: &str = "uhuahua";

/// Decimal places of micro-denominated tokens (`u` prefix).
pub const MICRO_DECIMALS: i32 = 6;

/// Prefix of IBC voucher denoms.
///
/// A denom label whose value still starts with this prefix has not been
/// resolved to a symbol yet.
pub const IBC_PREFIX: &str = "ibc/";

/// Returns `denom` with the hash of an `ibc/<hash>` voucher upper-cased.
///
/// Nodes report voucher hashes in upper case but captured records may not,
/// so label tables key on this form. Other denoms are returned unchanged.
#[must_use]
pub fn canonical_denom(denom: &str) -> String {
    match denom.strip_prefix(IBC_PREFIX) {
        Some(hash) => format!("{IBC_PREFIX}{}", hash.to_ascii_uppercase()),
        None => denom.to_string(),
    }
}

/// Returns true if `label` is the not-yet-known sentinel for an IBC denom.
#[must_use]
pub fn is_unresolved_label(label: &str) -> bool {
    label.starts_with(IBC_PREFIX)
}

/// A quantity of a denom in base units, as it appears on chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coin {
    /// Amount in base units.
    pub amount: u128,
    /// Denomination (e.g. `uhuahua`, `ibc/27394F...`).
    pub denom: String,
}

impl Coin {
    /// Creates a new coin.
    #[must_use]
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            amount,
            denom: denom.into(),
        }
    }

    /// Parses a coin from an LCD `{"denom": ..., "amount": "..."}` object.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is missing or the amount is not an
    /// unsigned integer.
    pub fn from_value(value: &Value) -> Result<Self, CoinError> {
        let denom = value
            .get("denom")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| CoinError::MissingDenom(value.to_string()))?;
        let amount = match value.get("amount") {
            Some(Value::String(s)) => parse_amount(s)?,
            Some(Value::Number(n)) => parse_amount(&n.to_string())?,
            _ => return Err(CoinError::MissingAmount(value.to_string())),
        };
        Ok(Self::new(amount, denom))
    }

    /// Parses a comma-separated coin list such as `"10uhuahua,5uosmo"`.
    ///
    /// An empty string yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns the error of the first coin that fails to parse.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, CoinError> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Returns the `ibc/` hash when this is an IBC voucher denom.
    #[must_use]
    pub fn ibc_hash(&self) -> Option<&str> {
        self.denom.strip_prefix(IBC_PREFIX)
    }
}

fn parse_amount(s: &str) -> Result<u128, CoinError> {
    // Decimal coins (DecCoin) only show up in reward queries; truncate them.
    let integral = s.split('.').next().unwrap_or(s);
    integral
        .parse()
        .map_err(|_| CoinError::InvalidAmount(s.to_string()))
}

impl FromStr for Coin {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(|| CoinError::MissingDenom(s.to_string()))?;
        if split == 0 {
            return Err(CoinError::MissingAmount(s.to_string()));
        }
        let (amount, denom) = s.split_at(split);
        Ok(Self::new(parse_amount(amount)?, denom))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A token quantity in display units, ready for a report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Quantity in display units.
    pub quantity: f64,
    /// Currency symbol (e.g. `HUAHUA`).
    pub currency: String,
}

impl Amount {
    /// Creates a new amount.
    #[must_use]
    pub fn new(quantity: f64, currency: impl Into<String>) -> Self {
        Self {
            quantity,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_coin_string() {
        let coin: Coin = "1500uhuahua".parse().unwrap();
        assert_eq!(coin, Coin::new(1500, "uhuahua"));
        assert_eq!(coin.to_string(), "1500uhuahua");
    }

    #[test]
    fn test_parse_ibc_coin() {
        let coin: Coin = "7ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
            .parse()
            .unwrap();
        assert_eq!(coin.amount, 7);
        assert_eq!(
            coin.ibc_hash(),
            Some("27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2")
        );
    }

    #[test]
    fn test_parse_decimal_coin_truncates() {
        let coin: Coin = "12.75uhuahua".parse().unwrap();
        assert_eq!(coin.amount, 12);
    }

    #[test]
    fn test_parse_list() {
        let coins = Coin::parse_list("10uhuahua, 5uosmo").unwrap();
        assert_eq!(coins, vec![Coin::new(10, "uhuahua"), Coin::new(5, "uosmo")]);
        assert!(Coin::parse_list("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "uhuahua".parse::<Coin>(),
            Err(CoinError::MissingAmount(_))
        ));
        assert!(matches!("1500".parse::<Coin>(), Err(CoinError::MissingDenom(_))));
    }

    #[test]
    fn test_from_value() {
        let coin = Coin::from_value(&json!({"denom": "uhuahua", "amount": "42"})).unwrap();
        assert_eq!(coin, Coin::new(42, "uhuahua"));

        let bad = Coin::from_value(&json!({"denom": "uhuahua", "amount": "lots"}));
        assert!(matches!(bad, Err(CoinError::InvalidAmount(_))));

        let missing = Coin::from_value(&json!({"amount": "1"}));
        assert!(matches!(missing, Err(CoinError::MissingDenom(_))));
    }

    #[test]
    fn test_canonical_denom() {
        assert_eq!(canonical_denom("ibc/27394fb0"), "ibc/27394FB0");
        assert_eq!(canonical_denom("ibc/27394FB0"), "ibc/27394FB0");
        assert_eq!(canonical_denom("uhuahua"), "uhuahua");
    }

    #[test]
    fn test_unresolved_label() {
        assert!(is_unresolved_label("ibc/27394FB0"));
        assert!(!is_unresolved_label("OSMO"));
    }
}
