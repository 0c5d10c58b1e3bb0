//! Deterministic scene RNG resource.
//!
//! Wraps `ChaCha8Rng` so the scatter of parts is identical across platforms
//! for a given seed. Layout code takes `ResMut<SceneRng>` instead of
//! `rand::thread_rng()`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_SEED;

/// Deterministic RNG resource for scene generation.
///
/// Systems use `rng.0` (a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Resource)]
pub struct SceneRng(pub ChaCha8Rng);

impl Default for SceneRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SceneRng {
    /// Create a new `SceneRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
