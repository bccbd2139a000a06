//! Range error types.

use thiserror::Error;

/// Rejected bounds passed to one of the checked `try_next_*` accessors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// An unsigned range with `max <= min`.
    #[error("empty unsigned range: max ({max}) must be greater than min ({min})")]
    Unsigned {
        /// The requested lower bound.
        min: u64,
        /// The requested upper bound.
        max: u64,
    },

    /// A signed range with `max <= min`.
    #[error("empty signed range: max ({max}) must be greater than min ({min})")]
    Signed {
        /// The requested lower bound.
        min: i64,
        /// The requested upper bound.
        max: i64,
    },

    /// A double-precision range with `max <= min`.
    #[error("empty double range: max ({max}) must be greater than min ({min})")]
    Double {
        /// The requested lower bound.
        min: f64,
        /// The requested upper bound.
        max: f64,
    },

    /// A single-precision range with `max <= min`.
    #[error("empty float range: max ({max}) must be greater than min ({min})")]
    Float {
        /// The requested lower bound.
        min: f32,
        /// The requested upper bound.
        max: f32,
    },

    /// A floating-point bound, or the width between them, is NaN or infinite.
    #[error("non-finite range: [{min}, {max})")]
    NonFinite {
        /// The requested lower bound, widened to `f64`.
        min: f64,
        /// The requested upper bound, widened to `f64`.
        max: f64,
    },
}
