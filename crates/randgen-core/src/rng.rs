//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected. None of the implementations are suitable for
//! cryptographic use.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `i64` in the range `[min, max]` inclusive.
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64;

    /// Generate a fair coin flip.
    fn next_bool(&mut self) -> bool;
}

/// Production RNG backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Seeds from the operating system's entropy source.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Seeds from a fixed value so a run can be reproduced.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }

    fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        self.0.random_range(min..=max)
    }

    fn next_bool(&mut self) -> bool {
        self.0.random_bool(0.5)
    }
}
