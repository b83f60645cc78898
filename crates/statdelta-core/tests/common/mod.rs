use statdelta_core::model::{decode_snapshot, Snapshot};

pub const BEFORE: &str = include_str!("../fixtures/before.json");
pub const AFTER: &str = include_str!("../fixtures/after.json");
pub const RAW: &str = include_str!("../fixtures/raw_snapshot.json");

/// Decode a fixture, panicking on failure
#[allow(dead_code)]
pub fn snapshot(json: &str) -> Snapshot {
    decode_snapshot(json.as_bytes()).expect("fixture should decode")
}

/// The two observations of user 2040809 used across the scenario tests
#[allow(dead_code)]
pub fn before_and_after() -> (Snapshot, Snapshot) {
    (snapshot(BEFORE), snapshot(AFTER))
}
