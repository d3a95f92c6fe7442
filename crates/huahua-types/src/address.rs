//! Chihuahua account addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AddressError;

/// Human-readable bech32 prefix including the separator.
pub const ADDRESS_PREFIX: &str = "chihuahua1";

const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// 20-byte account payload plus checksum.
const ACCOUNT_DATA_LEN: usize = 38;

/// 32-byte contract payload plus checksum.
const CONTRACT_DATA_LEN: usize = 58;

/// A validated Chihuahua wallet address.
///
/// Validation checks the prefix, the bech32 alphabet and the data length.
/// The checksum is left to the node, which rejects bad addresses with a 400.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parses and validates an address.
    ///
    /// # Errors
    ///
    /// Returns an [`AddressError`] describing the first problem found.
    pub fn parse(address: &str) -> Result<Self, AddressError> {
        let Some(data) = address.strip_prefix(ADDRESS_PREFIX) else {
            return Err(AddressError::Prefix(address.to_string()));
        };

        if let Some(character) = data.chars().find(|c| !BECH32_CHARSET.contains(*c)) {
            return Err(AddressError::Character {
                address: address.to_string(),
                character,
            });
        }

        if data.len() != ACCOUNT_DATA_LEN && data.len() != CONTRACT_DATA_LEN {
            return Err(AddressError::Length {
                address: address.to_string(),
                length: data.len(),
            });
        }

        Ok(Self(address.to_string()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
