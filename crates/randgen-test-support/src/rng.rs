//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use randgen_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for ranges and `false` for coin
/// flips. Suitable for tests that do not depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }

    fn next_bool(&mut self) -> bool {
        false
    }
}

/// An RNG that returns values from predetermined sequences. Integer draws and
/// coin flips consume separate sequences. Panics if a sequence is exhausted,
/// or if an integer is not representable as `u32` when drawn as one.
#[derive(Debug, Default)]
pub struct SequenceRng {
    values: Vec<i64>,
    index: usize,
    flips: Vec<bool>,
    flip_index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` that yields the given integers.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Sets the coin flip sequence.
    #[must_use]
    pub fn with_flips(mut self, flips: Vec<bool>) -> Self {
        self.flips = flips;
        self
    }

    fn next_value(&mut self) -> i64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.next_value();
        u32::try_from(val).expect("SequenceRng value does not fit in u32")
    }

    fn next_i64_range(&mut self, _min: i64, _max: i64) -> i64 {
        self.next_value()
    }

    fn next_bool(&mut self) -> bool {
        let flip = self.flips[self.flip_index];
        self.flip_index += 1;
        flip
    }
}
