//! Chained digest state and per-block working registers.

use std::fmt::{self, Display, Formatter, LowerHex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::H256_INIT;
use super::computations::{big_sigma0, big_sigma1, ch, maj};
use crate::primitives::U256;

/// The running hash value H0..H7.
///
/// Starts at [`DigestState::INITIAL`] and absorbs the working registers
/// of every block. After the last block it is the message digest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigestState(pub [u32; 8]);

impl DigestState {
    /// The SHA-256 initial hash value.
    pub const INITIAL: Self = Self(H256_INIT);

    pub fn words(&self) -> [u32; 8] {
        self.0
    }

    /// Serializes the state as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }

    /// Adds the registers of a finished block into this state, word by word,
    /// modulo 2³².
    pub fn fold(&self, registers: &WorkingRegisters) -> Self {
        let r = registers.to_words();
        let mut out = self.0;

        for (h, v) in out.iter_mut().zip(r) {
            *h = h.wrapping_add(v);
        }

        Self(out)
    }
}

impl Default for DigestState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<[u32; 8]> for DigestState {
    fn from(words: [u32; 8]) -> Self {
        Self(words)
    }
}

impl From<DigestState> for [u32; 8] {
    fn from(state: DigestState) -> Self {
        state.0
    }
}

impl From<DigestState> for U256 {
    fn from(state: DigestState) -> Self {
        U256::from(state.0)
    }
}

/// Eight space separated groups of eight lowercase hex digits.
impl Display for DigestState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{word:08x}")?;
        }

        Ok(())
    }
}

/// 64 contiguous lowercase hex digits.
impl LowerHex for DigestState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{word:08x}")?;
        }

        Ok(())
    }
}

/// The eight working variables a..h of one block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkingRegisters {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
}

impl WorkingRegisters {
    pub fn to_words(&self) -> [u32; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }

    /// Applies one compression round with round constant `k` and schedule
    /// word `w`.
    #[inline(always)]
    pub fn round(&self, k: u32, w: u32) -> Self {
        let t1 = self
            .h
            .wrapping_add(big_sigma1(self.e))
            .wrapping_add(ch(self.e, self.f, self.g))
            .wrapping_add(k)
            .wrapping_add(w);

        let t2 = big_sigma0(self.a).wrapping_add(maj(self.a, self.b, self.c));

        Self {
            a: t1.wrapping_add(t2),
            b: self.a,
            c: self.b,
            d: self.c,
            e: self.d.wrapping_add(t1),
            f: self.e,
            g: self.f,
            h: self.g,
        }
    }
}

impl From<DigestState> for WorkingRegisters {
    fn from(state: DigestState) -> Self {
        let [a, b, c, d, e, f, g, h] = state.0;

        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }
}

impl From<[u32; 8]> for WorkingRegisters {
    fn from(words: [u32; 8]) -> Self {
        Self::from(DigestState(words))
    }
}

/// Registers in a..h order, each as eight lowercase hex digits separated
/// by two spaces.
impl Display for WorkingRegisters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, word) in self.to_words().iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }

            write!(f, "{word:08x}")?;
        }

        Ok(())
    }
}
