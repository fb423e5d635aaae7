//! SHA-256 message padding
//!
//! Implements the padding rule of FIPS 180-4 §5.1.1: a single `1` bit
//! (the byte `0x80`), zero bytes up to 56 mod 64, then the message length in
//! bits as a 64-bit big-endian integer. The padded message is split into
//! 64-byte blocks which are the unit of compression.

use std::fmt::{self, Display, Formatter};

use log::debug;

use super::BLOCK_LEN;

/// Offset of the 64-bit length field inside the final block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// One 512-bit message block.
///
/// Bytes are stored in the order produced by padding, so the block can be
/// read directly as sixteen big-endian words.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block([u8; BLOCK_LEN]);

/// Error returned when building a `Block` from a slice of the wrong size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSizeError {
    /// The slice was not exactly 64 bytes long.
    WrongLength(usize),
}

impl Display for BlockSizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BlockSizeError::WrongLength(len) => {
                write!(f, "block must be {BLOCK_LEN} bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for BlockSizeError {}

impl Block {
    /// An all-zero block.
    pub const ZERO: Self = Self([0u8; BLOCK_LEN]);

    /// Wraps 64 raw bytes.
    pub const fn new(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the block.
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    /// Reads the block as sixteen big-endian 32-bit words.
    pub fn words(&self) -> [u32; 16] {
        let mut w = [0u32; 16];

        for (slot, chunk) in w.iter_mut().zip(self.0.chunks_exact(4)) {
            *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        w
    }
}

impl From<[u8; BLOCK_LEN]> for Block {
    fn from(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = BlockSizeError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; BLOCK_LEN] = value
            .try_into()
            .map_err(|_| BlockSizeError::WrongLength(value.len()))?;

        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Eight groups of eight bytes, hex encoded and separated by spaces.
impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, group) in self.0.chunks_exact(8).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            for byte in group {
                write!(f, "{byte:02x}")?;
            }
        }

        Ok(())
    }
}

/// A message after padding.
///
/// Always holds at least one block. The final 8 bytes of the last block
/// carry the bit length of the unpadded message, modulo 2⁶⁴.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
    blocks: Vec<Block>,
}

impl PaddedMessage {
    /// Builds a padded message from blocks that are already padded.
    ///
    /// # Panics
    /// Panics if `blocks` is empty.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        assert!(!blocks.is_empty(), "padded message needs at least one block");

        Self { blocks }
    }

    /// Builds a padded message from a flat, already padded byte sequence.
    ///
    /// # Panics
    /// Panics if `bytes` is empty or its length is not a multiple of 64.
    pub fn from_padded_bytes(bytes: &[u8]) -> Self {
        assert!(
            !bytes.is_empty() && bytes.len() % BLOCK_LEN == 0,
            "padded length must be a non-zero multiple of {BLOCK_LEN}, got {}",
            bytes.len()
        );

        let blocks = bytes
            .chunks_exact(BLOCK_LEN)
            .map(|chunk| {
                let mut block = [0u8; BLOCK_LEN];
                block.copy_from_slice(chunk);
                Block(block)
            })
            .collect();

        Self { blocks }
    }

    /// The blocks in message order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`: a padded message has at least one block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total padded size in bytes.
    pub fn byte_len(&self) -> usize {
        self.blocks.len() * BLOCK_LEN
    }

    /// The bit length recorded in the trailing length field.
    pub fn bit_length(&self) -> u64 {
        let last = self.last_block();
        let mut field = [0u8; 8];
        field.copy_from_slice(&last.0[LENGTH_OFFSET..]);

        u64::from_be_bytes(field)
    }

    /// Iterates the blocks in message order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Concatenates all blocks into one byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());

        for block in &self.blocks {
            out.extend_from_slice(&block.0);
        }

        out
    }

    /// Recovers the unpadded message.
    ///
    /// The byte count is taken from the length field. If the field claims
    /// more bytes than the blocks hold, all available bytes are returned.
    pub fn original(&self) -> Vec<u8> {
        let claimed = self.bit_length() / 8;
        let len = usize::try_from(claimed).map_or(self.byte_len(), |n| n.min(self.byte_len()));

        self.blocks
            .iter()
            .flat_map(|block| block.0.iter().copied())
            .take(len)
            .collect()
    }

    fn last_block(&self) -> &Block {
        // Non-empty by construction.
        &self.blocks[self.blocks.len() - 1]
    }
}

impl<'a> IntoIterator for &'a PaddedMessage {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// One `index: block` line per block.
impl Display for PaddedMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            writeln!(f, "{i}: {block}")?;
        }

        Ok(())
    }
}

/// Length field value for a message of `byte_len` bytes.
///
/// The bit count wraps modulo 2⁶⁴.
pub fn message_bit_length(byte_len: u64) -> u64 {
    byte_len.wrapping_mul(8)
}

/// Pads `message` into 64-byte blocks.
///
/// Every input, including the empty message, yields at least one block.
/// When fewer than 9 bytes remain in the last partial block, the padding
/// spills into an extra block holding only zeros and the length field.
pub fn pad(message: &[u8]) -> PaddedMessage {
    let len = message.len();
    let block_count = (len + 9).div_ceil(BLOCK_LEN);

    let mut blocks: Vec<Block> = message
        .chunks(BLOCK_LEN)
        .map(|chunk| {
            let mut block = [0u8; BLOCK_LEN];
            block[..chunk.len()].copy_from_slice(chunk);
            Block(block)
        })
        .collect();

    // A message that ends exactly on a block boundary still needs a block
    // for the 0x80 marker.
    if len % BLOCK_LEN == 0 {
        blocks.push(Block::ZERO);
    }

    blocks[len / BLOCK_LEN].0[len % BLOCK_LEN] = 0x80;

    if blocks.len() < block_count {
        blocks.push(Block::ZERO);
    }

    let bit_len = message_bit_length(len as u64);
    let last = blocks.len() - 1;
    blocks[last].0[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());

    debug!("padded {len} bytes into {} blocks", blocks.len());

    PaddedMessage { blocks }
}

/// Recovers the unpadded message from `padded`.
///
/// See [`PaddedMessage::original`].
pub fn original(padded: &PaddedMessage) -> Vec<u8> {
    padded.original()
}
