//! Shared test doubles for the prand generator.

mod rng;

pub use rng::{MockRng, SequenceRng};
