//! Process-wide default generator.
//!
//! One [`Prand`] with process lifetime, seeded with `0` at startup. The free
//! functions here draw from it without the caller holding any state. Access
//! goes through a mutex, so concurrent callers never race on the state word,
//! but the interleaving of their draws is unspecified. Use
//! [`with_default`] when a run of draws must stay contiguous.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::rng::DeterministicRng;
use crate::splitmix::Prand;

static DEFAULT: Mutex<Prand> = Mutex::new(Prand::new(0));

// The guarded value is a single word, so a panic elsewhere cannot leave it
// half-written and a poisoned lock is safe to reuse.
fn lock() -> MutexGuard<'static, Prand> {
    DEFAULT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with exclusive access to the default generator.
pub fn with_default<R>(f: impl FnOnce(&mut Prand) -> R) -> R {
    f(&mut lock())
}

/// Overwrites the default generator's state word.
pub fn reseed(seed: u64) {
    lock().set_state(seed);
    debug!(seed, "reseeded default generator");
}

/// Returns the default generator's current state word.
#[must_use]
pub fn state() -> u64 {
    lock().state()
}

/// [`DeterministicRng::next_uint`] against the default generator.
#[must_use]
pub fn next_uint(min: u64, max: u64) -> u64 {
    lock().next_uint(min, max)
}

/// [`DeterministicRng::next_int`] against the default generator.
#[must_use]
pub fn next_int(min: i64, max: i64) -> i64 {
    lock().next_int(min, max)
}

/// [`DeterministicRng::next_double`] against the default generator.
#[must_use]
pub fn next_double(min: f64, max: f64) -> f64 {
    lock().next_double(min, max)
}

/// [`DeterministicRng::next_float`] against the default generator.
#[must_use]
pub fn next_float(min: f32, max: f32) -> f32 {
    lock().next_float(min, max)
}
