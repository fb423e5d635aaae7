//! Conversions between `U256` and 32-bit word representations
//!
//! A SHA-256 state is eight 32-bit words. These conversions move between
//! that form and the serialized 32-byte form, most significant word first.

use crate::primitives::U256;

/// Splits a `U256` into eight big-endian 32-bit words.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }
}

/// Serializes eight 32-bit words into a `U256`, big-endian.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(4).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U256(out)
    }
}
