//! Fixed-size account identifiers and deterministic sub-account derivation.

use core::fmt;
use core::str::FromStr;

use sha2::{Digest, Sha256};

/// Number of bytes in an [`Address`].
pub const ADDRESS_LEN: usize = 20;

/// Fixed-size identifier for an account or derived sub-account.
///
/// Addresses are plain opaque bytes to this crate. Derived sub-accounts
/// (arena buckets, stake accounts, crafting slots) are computed with
/// [`Address::derive`], which must stay stable across releases to remain
/// compatible with state already recorded on chain.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address, used as a namespace root for system sub-accounts.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Derives a sub-account address from this address and a salt.
    ///
    /// The derivation is `SHA-256(parent ‖ salt)` truncated to 20 bytes.
    /// Same parent and salt always yield the same address.
    pub fn derive(&self, salt: &[u8]) -> Address {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(salt);
        let digest = hasher.finalize();
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest[..ADDRESS_LEN]);
        Address(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// Errors from parsing an address out of its hex form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(stripped).map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        let array: [u8; ADDRESS_LEN] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| AddressParseError::WrongLength {
                    expected: ADDRESS_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Address(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let parent = Address([7u8; ADDRESS_LEN]);
        assert_eq!(parent.derive(b"stake"), parent.derive(b"stake"));
        assert_ne!(parent.derive(b"stake"), parent.derive(b"stale"));
        assert_ne!(parent.derive(b"stake"), Address::ZERO.derive(b"stake"));
    }

    #[test]
    fn hex_round_trip() {
        let address = Address([0xab; ADDRESS_LEN]);
        let parsed: Address = address.to_string().parse().unwrap();
        assert_eq!(parsed, address);
    }

    #[test]
    fn rejects_short_hex() {
        let err = "0xabcd".parse::<Address>().unwrap_err();
        assert_eq!(
            err,
            AddressParseError::WrongLength {
                expected: ADDRESS_LEN,
                actual: 2
            }
        );
    }
}
