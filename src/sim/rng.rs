//! RNG facade
//!
//! Every random draw in the simulation goes through [`RandomSource`] so a
//! seeded generator (or a scripted one in tests) makes rounds reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform draws used by placement and spawning
pub trait RandomSource {
    /// Uniform integer in `lo..=hi`. Returns `lo` if the range is empty.
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32;
    /// Uniform real in `lo..=hi`. Returns `lo` if the range is empty.
    fn real(&mut self, lo: f32, hi: f32) -> f32;
    /// Fair coin flip
    fn coin_flip(&mut self) -> bool;
}

/// Seeded PCG generator
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    fn real(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Test source with scripted integer draws.
///
/// Queued integers are consumed first (clamped into the requested range);
/// once the queue is empty integers come from `inner`, or are pinned to the
/// range minimum when `always_min` is set. Reals and coin flips always come
/// from `inner` so placement still spreads bubbles out.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRng {
    pub ints: std::collections::VecDeque<u32>,
    pub always_min: bool,
    inner: SimRng,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(seed: u64) -> Self {
        Self {
            ints: Default::default(),
            always_min: false,
            inner: SimRng::new(seed),
        }
    }

    pub fn always_min(seed: u64) -> Self {
        Self {
            always_min: true,
            ..Self::new(seed)
        }
    }

    pub fn with_ints(seed: u64, ints: &[u32]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            ..Self::new(seed)
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if let Some(v) = self.ints.pop_front() {
            return v.clamp(lo, hi.max(lo));
        }
        if self.always_min {
            return lo;
        }
        self.inner.int_inclusive(lo, hi)
    }

    fn real(&mut self, lo: f32, hi: f32) -> f32 {
        self.inner.real(lo, hi)
    }

    fn coin_flip(&mut self) -> bool {
        self.inner.coin_flip()
    }
}
