use std::ops::Index;

use super::padding::Block;
use super::state::{DigestState, WorkingRegisters};
use super::{K256, ROUNDS};

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// The 64-word message schedule W of one block.
///
/// Words 0..16 are the block itself, read big-endian. The remaining words
/// follow `W[j] = σ1(W[j-2]) + W[j-7] + σ0(W[j-15]) + W[j-16]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MessageSchedule([u32; ROUNDS]);

impl MessageSchedule {
    pub fn expand(block: &Block) -> Self {
        let mut w = [0u32; ROUNDS];
        w[..16].copy_from_slice(&block.words());

        for j in 16..ROUNDS {
            w[j] = small_sigma1(w[j - 2])
                .wrapping_add(w[j - 7])
                .wrapping_add(small_sigma0(w[j - 15]))
                .wrapping_add(w[j - 16]);
        }

        Self(w)
    }

    pub fn words(&self) -> &[u32; ROUNDS] {
        &self.0
    }
}

impl Index<usize> for MessageSchedule {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut DigestState, w: &MessageSchedule) {
    let mut regs = WorkingRegisters::from(*state);

    for (&k, &wi) in K256.iter().zip(w.words()) {
        regs = regs.round(k, wi);
    }

    *state = state.fold(&regs);
}

/// Unrolled variant: instead of shifting a..h every round, the register
/// names rotate through the macro arguments and realign every 8 rounds.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut DigestState, w: &MessageSchedule) {
    let w = w.words();
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.words();

    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $i:expr) => {{
            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(K256[$i])
                .wrapping_add(w[$i]);
            let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(t2);
        }};
    }

    macro_rules! eight_rounds {
        ($i:expr) => {
            round!(a, b, c, d, e, f, g, h, $i);
            round!(h, a, b, c, d, e, f, g, $i + 1);
            round!(g, h, a, b, c, d, e, f, $i + 2);
            round!(f, g, h, a, b, c, d, e, $i + 3);
            round!(e, f, g, h, a, b, c, d, $i + 4);
            round!(d, e, f, g, h, a, b, c, $i + 5);
            round!(c, d, e, f, g, h, a, b, $i + 6);
            round!(b, c, d, e, f, g, h, a, $i + 7);
        };
    }

    eight_rounds!(0);
    eight_rounds!(8);
    eight_rounds!(16);
    eight_rounds!(24);
    eight_rounds!(32);
    eight_rounds!(40);
    eight_rounds!(48);
    eight_rounds!(56);

    *state = state.fold(&WorkingRegisters::from([a, b, c, d, e, f, g, h]));
}
