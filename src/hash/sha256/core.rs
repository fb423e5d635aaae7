//! SHA-256 core hashing functions
//!
//! This module chains the compression function over a padded message.
//!
//! It provides:
//! - `compress`, the compression step on one 512-bit block
//! - `hash_state`, the untraced digest of a padded message
//! - `trace` and `digest`, the observable digest of a padded message
//! - `sha256`, a one-shot hash of arbitrary input
//!
//! Both paths run the same round function and always agree.

use super::computations::{MessageSchedule, all_rounds};
use super::padding::{Block, PaddedMessage, pad};
use super::state::DigestState;
use super::trace::{SNAPSHOTS_PER_BLOCK, Snapshot, Trace};
use crate::primitives::U256;

/// Compresses a single 512-bit message block into `state`.
///
/// # Notes
/// - The full 64-word schedule is expanded before the rounds run.
/// - Input words are interpreted as big-endian, as required by SHA-256.
#[inline(always)]
pub fn compress(state: &mut DigestState, block: &Block) {
    let w = MessageSchedule::expand(block);

    all_rounds(state, &w);
}

/// Computes the final digest state of `padded` without recording snapshots.
pub fn hash_state(padded: &PaddedMessage) -> DigestState {
    let mut state = DigestState::INITIAL;

    for block in padded {
        compress(&mut state, block);
    }

    state
}

/// Returns a lazy iterator over the round and block snapshots of `padded`.
///
/// Call [`Trace::finish`] to obtain the digest once observation is done.
pub fn trace(padded: &PaddedMessage) -> Trace<'_> {
    Trace::new(padded)
}

/// Computes the digest of `padded` and collects every snapshot.
///
/// The returned vector holds, per block, 64 `Snapshot::Round` entries
/// followed by one `Snapshot::Block`.
pub fn digest(padded: &PaddedMessage) -> (DigestState, Vec<Snapshot>) {
    let mut observed = trace(padded);
    let mut snapshots = Vec::with_capacity(padded.len() * SNAPSHOTS_PER_BLOCK);
    snapshots.extend(observed.by_ref());

    (observed.state(), snapshots)
}

/// Computes the SHA-256 hash of the given input.
///
/// # Returns
/// - The 256-bit digest, serialized big-endian.
pub fn sha256(input: &[u8]) -> U256 {
    U256::from(hash_state(&pad(input)))
}
