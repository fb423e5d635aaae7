//! Observable execution of the compression function.
//!
//! [`Trace`] runs the same rounds as the untraced path but pauses after each
//! one, yielding a [`Snapshot`] of the registers. After the 64th round of a
//! block it yields one more snapshot carrying the folded digest state. The
//! iterator is lazy and single-pass: nothing is computed before `next` is
//! called and nothing is buffered.

use std::iter::FusedIterator;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::computations::MessageSchedule;
use super::padding::PaddedMessage;
use super::state::{DigestState, WorkingRegisters};
use super::{K256, ROUNDS};

/// Snapshots emitted per block: one per round plus the block fold.
pub const SNAPSHOTS_PER_BLOCK: usize = ROUNDS + 1;

/// A single observation of the compression state.
///
/// Block and round indices are zero-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Snapshot {
    /// Working registers after round `round` of block `block`.
    Round {
        block: usize,
        round: usize,
        registers: WorkingRegisters,
    },
    /// A block has been folded into the digest state.
    Block {
        block: usize,
        /// Digest state the block started from.
        initial: DigestState,
        /// Registers after the final round.
        registers: WorkingRegisters,
        /// `initial` plus `registers`, word by word.
        state: DigestState,
    },
}

impl Snapshot {
    /// Index of the block this snapshot belongs to.
    pub fn block(&self) -> usize {
        match self {
            Snapshot::Round { block, .. } | Snapshot::Block { block, .. } => *block,
        }
    }

    /// Round index, or `None` for a block snapshot.
    pub fn round(&self) -> Option<usize> {
        match self {
            Snapshot::Round { round, .. } => Some(*round),
            Snapshot::Block { .. } => None,
        }
    }

    /// Working registers at the time of the snapshot.
    pub fn registers(&self) -> &WorkingRegisters {
        match self {
            Snapshot::Round { registers, .. } | Snapshot::Block { registers, .. } => registers,
        }
    }
}

/// Where the trace is inside the current block.
#[derive(Clone, Debug)]
enum Phase {
    /// Schedule not built yet for the current block.
    Start,
    /// `next` round to run, with the block's schedule and live registers.
    Rounds {
        next: usize,
        schedule: MessageSchedule,
        registers: WorkingRegisters,
    },
    /// Every block has been folded.
    Done,
}

/// Lazy iterator over the snapshots of one digest computation.
#[derive(Clone, Debug)]
pub struct Trace<'a> {
    padded: &'a PaddedMessage,
    block: usize,
    state: DigestState,
    phase: Phase,
}

impl<'a> Trace<'a> {
    /// Starts a trace at the initial digest state. No rounds run yet.
    pub fn new(padded: &'a PaddedMessage) -> Self {
        Self {
            padded,
            block: 0,
            state: DigestState::INITIAL,
            phase: Phase::Start,
        }
    }

    /// The digest state as of the last folded block.
    pub fn state(&self) -> DigestState {
        self.state
    }

    /// Runs the remaining rounds and returns the final digest state.
    pub fn finish(mut self) -> DigestState {
        for _ in self.by_ref() {}

        self.state
    }

    fn remaining(&self) -> usize {
        let blocks_left = self.padded.len() - self.block;

        match &self.phase {
            Phase::Start => blocks_left * SNAPSHOTS_PER_BLOCK,
            Phase::Rounds { next, .. } => blocks_left * SNAPSHOTS_PER_BLOCK - next,
            Phase::Done => 0,
        }
    }
}

impl Iterator for Trace<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        if let Phase::Start = self.phase {
            let Some(block) = self.padded.blocks().get(self.block) else {
                self.phase = Phase::Done;
                return None;
            };

            self.phase = Phase::Rounds {
                next: 0,
                schedule: MessageSchedule::expand(block),
                registers: WorkingRegisters::from(self.state),
            };
        }

        match &mut self.phase {
            Phase::Rounds {
                next,
                schedule,
                registers,
            } if *next < ROUNDS => {
                let round = *next;
                *registers = registers.round(K256[round], schedule[round]);
                *next += 1;

                trace!("block {} round {round}: {registers}", self.block);

                Some(Snapshot::Round {
                    block: self.block,
                    round,
                    registers: *registers,
                })
            }
            Phase::Rounds { registers, .. } => {
                let registers = *registers;
                let initial = self.state;
                let block = self.block;

                self.state = initial.fold(&registers);
                self.block += 1;
                self.phase = Phase::Start;

                debug!("block {block} folded: {}", self.state);

                Some(Snapshot::Block {
                    block,
                    initial,
                    registers,
                    state: self.state,
                })
            }
            Phase::Start | Phase::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trace<'_> {}

impl FusedIterator for Trace<'_> {}
