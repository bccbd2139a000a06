//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use prand_core::DeterministicRng;

/// An RNG whose raw output is always `0`. Every range accessor therefore
/// returns `min`. Suitable for tests that do not depend on specific random
/// values.
#[derive(Debug, Default)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u64(&mut self) -> u64 {
        0
    }
}

/// An RNG that returns raw words from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need to pin the exact word fed
/// into range reduction.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given raw words.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of words consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u64(&mut self) -> u64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
