//! Error types for address and coin parsing.

use thiserror::Error;

/// Errors produced when validating a wallet address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Address does not start with the `chihuahua1` prefix.
    #[error("Invalid address '{0}': expected prefix chihuahua1")]
    Prefix(String),

    /// Address contains a character outside the bech32 alphabet.
    #[error("Invalid address '{address}': illegal character '{character}'")]
    Character {
        /// The rejected address.
        address: String,
        /// The first offending character.
        character: char,
    },

    /// Data part has a length that matches neither an account nor a contract.
    #[error("Invalid address '{address}': data part has length {length}")]
    Length {
        /// The rejected address.
        address: String,
        /// Length of the data part after the separator.
        length: usize,
    },
}

/// Errors produced when parsing a coin string or amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoinError {
    /// Coin string has no leading digits.
    #[error("Coin '{0}' has no amount")]
    MissingAmount(String),

    /// Coin string has no denomination after the amount.
    #[error("Coin '{0}' has no denom")]
    MissingDenom(String),

    /// Amount is not an unsigned integer.
    #[error("Invalid coin amount '{0}'")]
    InvalidAmount(String),
}
