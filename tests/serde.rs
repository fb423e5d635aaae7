#![cfg(feature = "serde")]

use sha256_trace::hash::sha256::{DigestState, Snapshot, digest, pad};

#[test]
fn snapshots_round_trip_through_json() {
    let (state, snapshots) = digest(&pad(b"abc"));

    let json = serde_json::to_string(&snapshots).unwrap();
    let back: Vec<Snapshot> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshots);

    let json = serde_json::to_string(&state).unwrap();
    let back: DigestState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn round_snapshot_has_named_registers() {
    let (_, snapshots) = digest(&pad(b"abc"));
    let value = serde_json::to_value(snapshots[0]).unwrap();

    assert_eq!(value["Round"]["block"], 0);
    assert_eq!(value["Round"]["round"], 0);
    assert_eq!(value["Round"]["registers"]["a"], 0x5d6aebcd_u32);
}
