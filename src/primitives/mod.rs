//! Primitive types
//!
//! Fixed-size value types shared by the hashing code.
//!
//! Current primitives include:
//! - `U256`: a 256-bit value, used as the byte-level form of a digest

mod u256;

/// Fixed-size 256-bit value.
pub use u256::U256;
