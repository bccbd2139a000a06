//! Random number generator abstraction for determinism.
//!
//! In production this is backed by [`Prand`](crate::Prand). In tests,
//! a scripted implementation is injected. Every implementor shares the same
//! range reduction, so a double only has to supply raw 64-bit words.

use crate::error::RangeError;
use crate::range;

/// Abstraction over a 64-bit pseudo-random source with range-bounded
/// accessors.
///
/// The unchecked accessors (`next_uint`, `next_int`, `next_double`,
/// `next_float`) require `max > min` and do not validate it beyond a
/// `debug_assert!`. The `try_next_*` accessors validate first and leave the
/// source untouched when they reject a range.
pub trait DeterministicRng: Send + Sync {
    /// Advances the source and returns its next raw 64-bit output.
    fn next_u64(&mut self) -> u64;

    /// Generates a `u64` in `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max == min`. Debug builds also panic if `max < min`.
    fn next_uint(&mut self, min: u64, max: u64) -> u64 {
        debug_assert!(max > min, "next_uint: empty range [{min}, {max})");
        range::reduce_uint(self.next_u64(), min, max)
    }

    /// Generates an `i64` in `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max == min`. Debug builds also panic if `max < min`.
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(max > min, "next_int: empty range [{min}, {max})");
        range::reduce_int(self.next_u64(), min, max)
    }

    /// Generates an `f64` in `[min, max)`, up to rounding.
    ///
    /// Draws from `[0, i64::MAX)` and rescales.
    fn next_double(&mut self, min: f64, max: f64) -> f64 {
        let draw = self.next_int(0, range::DOUBLE_DRAW_MAX);
        range::scale_double(draw, min, max)
    }

    /// Generates an `f32` in `[min, max)`, up to rounding. Narrow ranges
    /// may return `max`.
    ///
    /// Draws from the narrower `[0, i32::MAX)` and rescales in single
    /// precision.
    fn next_float(&mut self, min: f32, max: f32) -> f32 {
        let draw = self.next_int(0, range::FLOAT_DRAW_MAX);
        range::scale_float(draw, min, max)
    }

    /// Checked [`next_uint`](Self::next_uint).
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Unsigned` if `max <= min`.
    fn try_next_uint(&mut self, min: u64, max: u64) -> Result<u64, RangeError> {
        range::check_uint(min, max)?;
        Ok(self.next_uint(min, max))
    }

    /// Checked [`next_int`](Self::next_int).
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Signed` if `max <= min`.
    fn try_next_int(&mut self, min: i64, max: i64) -> Result<i64, RangeError> {
        range::check_int(min, max)?;
        Ok(self.next_int(min, max))
    }

    /// Checked [`next_double`](Self::next_double).
    ///
    /// # Errors
    ///
    /// Returns `RangeError::NonFinite` if a bound or the width is NaN or
    /// infinite, and `RangeError::Double` if `max <= min`.
    fn try_next_double(&mut self, min: f64, max: f64) -> Result<f64, RangeError> {
        range::check_double(min, max)?;
        Ok(self.next_double(min, max))
    }

    /// Checked [`next_float`](Self::next_float).
    ///
    /// # Errors
    ///
    /// Returns `RangeError::NonFinite` if a bound or the width is NaN or
    /// infinite, and `RangeError::Float` if `max <= min`.
    fn try_next_float(&mut self, min: f32, max: f32) -> Result<f32, RangeError> {
        range::check_float(min, max)?;
        Ok(self.next_float(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of raw words, cycling when exhausted.
    struct Cycle {
        words: Vec<u64>,
        index: usize,
    }

    impl DeterministicRng for Cycle {
        fn next_u64(&mut self) -> u64 {
            let word = self.words[self.index % self.words.len()];
            self.index += 1;
            word
        }
    }

    fn cycle(words: &[u64]) -> Cycle {
        Cycle {
            words: words.to_vec(),
            index: 0,
        }
    }

    #[test]
    fn test_next_uint_reduces_raw_word() {
        let mut rng = cycle(&[7, 1_000_003]);
        assert_eq!(rng.next_uint(10, 20), 17);
        assert_eq!(rng.next_uint(0, 1_000), 3);
    }

    #[test]
    fn test_next_int_reduces_raw_word() {
        let mut rng = cycle(&[u64::MAX]);
        assert_eq!(rng.next_int(-100, 100), -85);
    }

    #[test]
    fn test_next_double_zero_draw_is_min() {
        let mut rng = cycle(&[0]);
        let value = rng.next_double(-3.5, 2.0);
        assert!((value + 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_next_float_uses_narrow_internal_range() {
        // 2^30 reduced modulo i32::MAX stays 2^30, half the float draw range.
        let mut rng = cycle(&[1 << 30]);
        let value = rng.next_float(0.0, 10.0);
        assert!((value - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_try_next_uint_rejects_empty_range() {
        let mut rng = cycle(&[1]);
        assert_eq!(
            rng.try_next_uint(4, 4),
            Err(RangeError::Unsigned { min: 4, max: 4 })
        );
        assert_eq!(rng.index, 0);
    }

    #[test]
    fn test_try_next_int_rejects_inverted_range() {
        let mut rng = cycle(&[1]);
        assert_eq!(
            rng.try_next_int(3, -3),
            Err(RangeError::Signed { min: 3, max: -3 })
        );
        assert_eq!(rng.index, 0);
    }

    #[test]
    fn test_try_next_int_accepts_valid_range() {
        let mut rng = cycle(&[5]);
        assert_eq!(rng.try_next_int(-2, 2), Ok(-1));
        assert_eq!(rng.index, 1);
    }

    #[test]
    fn test_try_next_double_rejects_non_finite() {
        let mut rng = cycle(&[1]);
        assert!(matches!(
            rng.try_next_double(f64::NAN, 1.0),
            Err(RangeError::NonFinite { .. })
        ));
        assert!(matches!(
            rng.try_next_double(-f64::MAX, f64::MAX),
            Err(RangeError::NonFinite { .. })
        ));
        assert!(matches!(
            rng.try_next_double(2.0, 1.0),
            Err(RangeError::Double { .. })
        ));
    }

    #[test]
    fn test_try_next_float_rejects_empty_range() {
        let mut rng = cycle(&[1]);
        assert!(matches!(
            rng.try_next_float(1.0, 1.0),
            Err(RangeError::Float { .. })
        ));
        assert!(matches!(
            rng.try_next_float(0.0, f32::INFINITY),
            Err(RangeError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_trait_is_object_safe() {
        let mut rng = cycle(&[9]);
        let dyn_rng: &mut dyn DeterministicRng = &mut rng;
        assert_eq!(dyn_rng.next_uint(0, 4), 1);
    }
}
