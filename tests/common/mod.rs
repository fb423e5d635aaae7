#![allow(dead_code)]

use std::sync::Once;

use log::LevelFilter;
use sha256_trace::hash::sha256::DigestState;

static INIT: Once = Once::new();

pub fn setup_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_default_env()
            .format_timestamp(None)
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();
    });
}

/// Parses a 64 digit hex digest into state words.
pub fn state_from_hex(digest: &str) -> DigestState {
    let bytes = hex::decode(digest).unwrap();
    let mut words = [0u32; 8];

    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    DigestState(words)
}

pub const ABC: &[u8] = b"abc";
pub const TWO_BLOCK: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

pub const ABC_DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
pub const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
pub const TWO_BLOCK_DIGEST: &str =
    "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1";
