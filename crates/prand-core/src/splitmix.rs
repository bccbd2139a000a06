//! The splitmix64 generator.

use rand::{RngCore, SeedableRng};
use tracing::trace;

use crate::rng::DeterministicRng;

/// Odd increment added to the state on every step (2^64 / golden ratio).
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const MIX_MUL_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_MUL_2: u64 = 0x94D0_49BB_1331_11EB;

/// Avalanche mix of a single 64-bit word.
#[must_use]
pub const fn mix64(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
    let z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
    z ^ (z >> 31)
}

/// A splitmix64 generator: one 64-bit state word.
///
/// `Prand` is a plain value. Copying it forks the sequence: both copies
/// produce the same outputs from that point on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Prand {
    state: u64,
}

impl Prand {
    /// Creates a generator whose state word is `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn from_os_seed() -> Self {
        let seed: u64 = rand::random();
        trace!(seed, "seeded generator from OS entropy");
        Self::new(seed)
    }

    /// Returns the current state word.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Overwrites the state word, restarting the sequence from `seed`.
    pub fn set_state(&mut self, seed: u64) {
        self.state = seed;
    }

    /// Advances the state and returns the mixed, unreduced output.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }
}

impl DeterministicRng for Prand {
    fn next_u64(&mut self) -> u64 {
        Prand::next_u64(self)
    }
}

impl RngCore for Prand {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        Prand::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Prand::next_u64(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = Prand::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Prand {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
