//! SHA-256 with observable internals
//!
//! This crate computes SHA-256 digests while exposing every intermediate
//! step of the algorithm: the padded block layout of the message, the
//! message schedule of each block, the working registers after each of the
//! 64 rounds, and the chained digest state after each block.
//!
//! The focus is on **clarity and inspectability**. The hashing code never
//! formats or prints anything; it yields typed snapshots that callers can
//! render however they like. A text renderer is provided separately.
//!
//! # Module overview
//!
//! - `hash`
//!   SHA-256 padding, compression, tracing and rendering.
//!
//! - `primitives`
//!   `U256`, the fixed-size byte form of a digest.
//!
//! # Example
//!
//! ```
//! use sha256_trace::hash::sha256::{Snapshot, digest, pad};
//!
//! let padded = pad(b"abc");
//! let (state, snapshots) = digest(&padded);
//!
//! assert_eq!(format!("{state:x}"), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
//! assert_eq!(snapshots.len(), 65);
//! assert!(matches!(snapshots[64], Snapshot::Block { block: 0, .. }));
//! ```
//!
//! # Features
//!
//! - `speed`: unrolls the round loop of the untraced path.
//! - `serde`: derives `Serialize`/`Deserialize` for state and snapshot types.
//!
//! Non-goals: incremental hashing of unbounded input, keyed variants and
//! constant-time execution.

pub mod hash;
pub mod primitives;
