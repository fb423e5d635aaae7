mod common;

use sha256_trace::hash::sha256::{
    BLOCK_LEN, Block, BlockSizeError, PaddedMessage, message_bit_length, original, pad,
};

use common::{ABC, TWO_BLOCK, setup_logger};

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

fn length_field(padded: &PaddedMessage) -> u64 {
    let bytes = padded.to_bytes();
    u64::from_be_bytes(bytes[bytes.len() - 8..].try_into().unwrap())
}

// -------------------------------------------------------
// 1. LAYOUT
// -------------------------------------------------------

#[test]
fn pad_abc_layout() {
    setup_logger();

    let padded = pad(ABC);
    assert_eq!(padded.len(), 1);

    let mut expected = [0u8; 64];
    expected[..3].copy_from_slice(b"abc");
    expected[3] = 0x80;
    expected[63] = 0x18;

    assert_eq!(padded.blocks()[0].as_bytes(), &expected);
}

#[test]
fn pad_empty_message() {
    let padded = pad(&[]);
    assert_eq!(padded.len(), 1);
    assert!(!padded.is_empty());

    let bytes = padded.to_bytes();
    assert_eq!(bytes[0], 0x80);
    assert!(bytes[1..].iter().all(|&b| b == 0));
}

#[test]
fn pad_two_block_vector_spills_into_length_only_block() {
    let padded = pad(TWO_BLOCK);
    assert_eq!(TWO_BLOCK.len(), 56);
    assert_eq!(padded.len(), 2);

    let first = padded.blocks()[0].as_bytes();
    assert_eq!(&first[..56], TWO_BLOCK);
    assert_eq!(first[56], 0x80);
    assert!(first[57..].iter().all(|&b| b == 0));

    let second = padded.blocks()[1].as_bytes();
    assert!(second[..56].iter().all(|&b| b == 0));
    assert_eq!(padded.bit_length(), 448);
}

#[test]
fn pad_boundary_lengths() {
    // (message length, expected block count)
    let cases = [
        (0, 1),
        (1, 1),
        (55, 1),
        (56, 2),
        (63, 2),
        (64, 2),
        (119, 2),
        (120, 3),
        (128, 3),
    ];

    for (len, blocks) in cases {
        let padded = pad(&message(len));
        assert_eq!(padded.len(), blocks, "block count for length {len}");
        assert_eq!(padded.to_bytes()[len], 0x80, "marker for length {len}");
    }
}

#[test]
fn pad_full_block_message_gets_marker_block() {
    let msg = message(64);
    let padded = pad(&msg);

    assert_eq!(padded.blocks()[0].as_bytes().as_slice(), msg.as_slice());
    assert_eq!(padded.blocks()[1].as_bytes()[0], 0x80);
    assert_eq!(length_field(&padded), 512);
}

// -------------------------------------------------------
// 2. INVARIANTS OVER LENGTHS 0..=300
// -------------------------------------------------------

#[test]
fn pad_length_invariant() {
    for len in 0..=300 {
        let padded = pad(&message(len));

        assert_eq!(padded.byte_len() % BLOCK_LEN, 0, "length {len}");
        assert!(padded.byte_len() >= len + 9, "length {len}");
        assert!(padded.byte_len() < len + 9 + BLOCK_LEN, "length {len}");
        assert_eq!(padded.to_bytes().len(), padded.byte_len());
    }
}

#[test]
fn pad_round_trip() {
    for len in 0..=300 {
        let msg = message(len);
        let padded = pad(&msg);

        assert_eq!(original(&padded), msg, "length {len}");
        assert_eq!(padded.original(), msg, "length {len}");
    }
}

#[test]
fn pad_bit_length_field() {
    for len in 0..=300 {
        let padded = pad(&message(len));

        assert_eq!(length_field(&padded), 8 * len as u64, "length {len}");
        assert_eq!(padded.bit_length(), 8 * len as u64, "length {len}");
    }
}

#[test]
fn bit_length_wraps_modulo_2_64() {
    assert_eq!(message_bit_length(0), 0);
    assert_eq!(message_bit_length(3), 24);
    assert_eq!(message_bit_length(1 << 61), 0);
    assert_eq!(message_bit_length((1 << 61) + 1), 8);
    assert_eq!(message_bit_length(u64::MAX), u64::MAX - 7);
}

// -------------------------------------------------------
// 3. HAND-BUILT PADDED MESSAGES
// -------------------------------------------------------

#[test]
fn from_padded_bytes_matches_pad() {
    let padded = pad(TWO_BLOCK);
    let rebuilt = PaddedMessage::from_padded_bytes(&padded.to_bytes());

    assert_eq!(rebuilt, padded);
}

#[test]
#[should_panic(expected = "multiple of 64")]
fn from_padded_bytes_rejects_partial_block() {
    let _ = PaddedMessage::from_padded_bytes(&[0u8; 65]);
}

#[test]
#[should_panic(expected = "multiple of 64")]
fn from_padded_bytes_rejects_empty() {
    let _ = PaddedMessage::from_padded_bytes(&[]);
}

#[test]
#[should_panic(expected = "at least one block")]
fn from_blocks_rejects_empty() {
    let _ = PaddedMessage::from_blocks(Vec::new());
}

#[test]
fn original_clamps_oversized_length_field() {
    let mut bytes = [0xaau8; 64];
    bytes[56..].copy_from_slice(&u64::MAX.to_be_bytes());

    let padded = PaddedMessage::from_blocks(vec![Block::new(bytes)]);

    assert_eq!(padded.original().len(), 64);
}

#[test]
fn original_floors_partial_byte_counts() {
    let mut bytes = [0x11u8; 64];
    bytes[56..].copy_from_slice(&13u64.to_be_bytes());

    let padded = PaddedMessage::from_blocks(vec![Block::new(bytes)]);

    assert_eq!(padded.original(), vec![0x11]);
}

// -------------------------------------------------------
// 4. BLOCKS
// -------------------------------------------------------

#[test]
fn block_try_from_slice() {
    let bytes = message(64);
    let block = Block::try_from(bytes.as_slice()).unwrap();
    assert_eq!(block.as_bytes().as_slice(), bytes.as_slice());

    let err = Block::try_from(&bytes[..63]).unwrap_err();
    assert_eq!(err, BlockSizeError::WrongLength(63));
    assert_eq!(err.to_string(), "block must be 64 bytes, got 63");
}

#[test]
fn block_words_are_big_endian() {
    let words = pad(ABC).blocks()[0].words();

    assert_eq!(words[0], 0x61626380);
    assert!(words[1..15].iter().all(|&w| w == 0));
    assert_eq!(words[15], 0x18);
}

#[test]
fn block_and_message_display() {
    let padded = pad(ABC);
    let zeros = "0000000000000000";
    let block = format!(
        "6162638000000000 {zeros} {zeros} {zeros} {zeros} {zeros} {zeros} 0000000000000018"
    );

    assert_eq!(padded.blocks()[0].to_string(), block);
    assert_eq!(padded.to_string(), format!("0: {block}\n"));
}

#[test]
fn padded_message_iterates_in_order() {
    let padded = pad(&message(200));
    let collected: Vec<&Block> = (&padded).into_iter().collect();

    assert_eq!(collected.len(), padded.len());
    assert!(padded.iter().eq(collected.iter().copied()));
}
