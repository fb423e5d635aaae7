//! Conversion utilities
//!
//! Explicit conversions between `U256` and its byte and word forms. Both
//! forms use big-endian order, matching how a SHA-256 digest is serialized.

mod u32;
mod u8;
