//! Conversions between `U256` and byte representations

use crate::primitives::U256;

/// Converts a `U256` into a 32-byte array, big-endian.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Interprets a 32-byte array as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Attempts to read a `U256` from a slice.
///
/// Fails unless the slice is exactly 32 bytes long.
impl TryFrom<&[u8]> for U256 {
    type Error = ();

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 32] = value.try_into().map_err(|_| ())?;

        Ok(U256(bytes))
    }
}

impl AsRef<[u8]> for U256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8; 32]> for U256 {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}
