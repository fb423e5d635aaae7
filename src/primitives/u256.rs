//! 256-bit value primitive
//!
//! `U256` is the byte-level form of a SHA-256 digest: 32 bytes in
//! big-endian order, the same order in which the digest words are
//! serialized. It is a plain value type and carries no arithmetic.

use std::fmt::{Display, Formatter, LowerHex, Result};

mod conv;

/// Fixed-size 256-bit value stored as 32 big-endian bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// Returns the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// 64 lowercase hex digits, most significant byte first.
impl Display for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(self, f)
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
