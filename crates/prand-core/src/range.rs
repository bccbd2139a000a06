//! Range reduction from raw 64-bit output.
//!
//! Integer ranges reduce with a plain modulo against the range width, so
//! widths that are not a power of two carry a small bias toward the low end.
//! Floating ranges rescale a non-negative signed draw linearly.

use crate::error::RangeError;

/// Upper bound of the internal draw feeding [`scale_double`].
pub const DOUBLE_DRAW_MAX: i64 = i64::MAX;

/// Upper bound of the internal draw feeding [`scale_float`].
pub const FLOAT_DRAW_MAX: i64 = i32::MAX as i64;

/// Reduces `raw` into `[min, max)`.
///
/// The width is `max - min` with wrapping, so an inverted range silently
/// produces a wrapped result.
///
/// # Panics
///
/// Panics if `max == min` (zero width).
#[must_use]
pub fn reduce_uint(raw: u64, min: u64, max: u64) -> u64 {
    min.wrapping_add(raw % max.wrapping_sub(min))
}

/// Reduces `raw` into `[min, max)` for signed bounds.
///
/// The width is the two's-complement difference `max - min` read as an
/// unsigned value, which keeps the full `[i64::MIN, i64::MAX)` span usable.
///
/// # Panics
///
/// Panics if `max == min` (zero width).
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn reduce_int(raw: u64, min: i64, max: i64) -> i64 {
    let width = max.wrapping_sub(min) as u64;
    min.wrapping_add((raw % width) as i64)
}

/// Rescales `draw` (taken from `[0, DOUBLE_DRAW_MAX)`) onto `[min, max)`.
///
/// Ranges only a few ulps wide can round onto `max`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scale_double(draw: i64, min: f64, max: f64) -> f64 {
    min + (draw as f64 / DOUBLE_DRAW_MAX as f64) * (max - min)
}

/// Rescales `draw` (taken from `[0, FLOAT_DRAW_MAX)`) onto `[min, max)` in
/// single precision.
///
/// Narrow ranges can round onto `max`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scale_float(draw: i64, min: f32, max: f32) -> f32 {
    min + (draw as f32 / FLOAT_DRAW_MAX as f32) * (max - min)
}

/// Rejects an unsigned range with `max <= min`.
///
/// # Errors
///
/// Returns `RangeError::Unsigned` for an empty or inverted range.
pub fn check_uint(min: u64, max: u64) -> Result<(), RangeError> {
    if max <= min {
        return Err(RangeError::Unsigned { min, max });
    }
    Ok(())
}

/// Rejects a signed range with `max <= min`.
///
/// # Errors
///
/// Returns `RangeError::Signed` for an empty or inverted range.
pub fn check_int(min: i64, max: i64) -> Result<(), RangeError> {
    if max <= min {
        return Err(RangeError::Signed { min, max });
    }
    Ok(())
}

/// Rejects a double range that is non-finite or has `max <= min`.
///
/// # Errors
///
/// Returns `RangeError::NonFinite` if a bound or the width is NaN or
/// infinite, and `RangeError::Double` for an empty or inverted range.
pub fn check_double(min: f64, max: f64) -> Result<(), RangeError> {
    if !(max - min).is_finite() {
        return Err(RangeError::NonFinite { min, max });
    }
    if max <= min {
        return Err(RangeError::Double { min, max });
    }
    Ok(())
}

/// Rejects a float range that is non-finite or has `max <= min`.
///
/// # Errors
///
/// Returns `RangeError::NonFinite` if a bound or the width is NaN or
/// infinite, and `RangeError::Float` for an empty or inverted range.
pub fn check_float(min: f32, max: f32) -> Result<(), RangeError> {
    if !(max - min).is_finite() {
        return Err(RangeError::NonFinite {
            min: f64::from(min),
            max: f64::from(max),
        });
    }
    if max <= min {
        return Err(RangeError::Float { min, max });
    }
    Ok(())
}
