//! Deterministic per-train RNG.
//!
//! Each train gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (train_id * MIXING_CONSTANT)
//!
//! so registering more trains never disturbs the streams of existing ones
//! and the intent phase can run in any order (or in parallel) without
//! changing results.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::TrainId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-train deterministic RNG.
pub struct TrainRng(SmallRng);

impl TrainRng {
    /// Seed deterministically from the run's global seed and a train ID.
    pub fn new(global_seed: u64, train: TrainId) -> Self {
        let seed = global_seed ^ (train.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TrainRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]; NaN counts as 0).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Pick one element of `slice` uniformly; `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
