//! Test helper functions for building sample trees

#![allow(dead_code)]
use treestep::{BstEngine, EngineConfig};

/// Keys of the seven-node complete tree used throughout the tests
pub const SAMPLE_KEYS: [i32; 7] = [50, 25, 75, 12, 37, 62, 87];

/// Engine holding the seven-node complete tree
pub fn sample_engine() -> BstEngine<i32> {
    engine_with(&SAMPLE_KEYS)
}

/// Engine seeded with `keys` in order
pub fn engine_with(keys: &[i32]) -> BstEngine<i32> {
    BstEngine::new(EngineConfig::empty().with_seed_keys(keys.to_vec()))
}
