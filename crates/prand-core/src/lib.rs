//! prand core — a splitmix64 bit-mixing generator.
//!
//! A generator is a single 64-bit state word. Each draw advances the word by
//! a fixed odd increment and runs it through an avalanche mix; the typed
//! accessors then reduce that output into a half-open range `[min, max)`.
//!
//! Two ways to hold state:
//!
//! * [`Prand`] is a plain `Copy` value owned by the caller. Equal states fed
//!   the same call sequence always produce equal outputs.
//! * [`global`] holds one process-wide generator, seeded with `0` at startup,
//!   for call sites that do not want to carry state around.
//!
//! ```
//! use prand_core::{DeterministicRng, Prand};
//!
//! let mut rng = Prand::new(12345);
//! let roll = rng.next_uint(1, 7);
//! assert!((1..7).contains(&roll));
//!
//! let offset = rng.next_int(-100, 100);
//! assert!((-100..100).contains(&offset));
//! ```
//!
//! This is not a cryptographic generator.

pub mod error;
pub mod global;
pub mod range;
pub mod rng;
pub mod splitmix;

pub use error::RangeError;
pub use rng::DeterministicRng;
pub use splitmix::{Prand, mix64};
