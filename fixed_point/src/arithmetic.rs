//! Saturating conversions and word operations on raw fixed-point values.
//!
//! Nothing in here fails: values outside the format's range are clamped to the
//! nearest boundary, exactly as a saturating hardware adder would do.

use crate::format::FixedPointFormat;

/// Clamps a raw value into the format's signed range (both ends inclusive).
///
/// ```
/// use fixed_point::{FixedPointFormat, saturate};
///
/// let format = FixedPointFormat::new(2, 14, 2)?;
/// assert_eq!(saturate(200_000, format), 131_071);
/// assert_eq!(saturate(-200_000, format), -131_072);
/// assert_eq!(saturate(42, format), 42);
/// # Ok::<(), fixed_point::FixedPointError>(())
/// ```
#[inline]
pub fn saturate(raw: i64, format: FixedPointFormat) -> i64 {
    raw.clamp(format.min_raw(), format.max_raw())
}

/// Converts a real value to the nearest raw value, then saturates.
///
/// Rounding is to nearest with ties to even. Infinities clamp to the
/// matching boundary and NaN maps to zero.
///
/// ```
/// use fixed_point::{FixedPointFormat, quantize};
///
/// let format = FixedPointFormat::new(2, 14, 2)?;
/// assert_eq!(quantize(1.0, format), 16384);
/// assert_eq!(quantize(-0.25, format), -4096);
/// assert_eq!(quantize(100.0, format), format.max_raw());
/// # Ok::<(), fixed_point::FixedPointError>(())
/// ```
#[inline]
pub fn quantize(value: f64, format: FixedPointFormat) -> i64 {
    let scaled = (value * format.scale()).round_ties_even();
    // `as` saturates at the i64 bounds and sends NaN to 0.
    saturate(scaled as i64, format)
}

/// Converts a raw value back to a real value.
#[inline]
pub fn dequantize(raw: i64, format: FixedPointFormat) -> f64 {
    raw as f64 / format.scale()
}

/// Arithmetic right shift, rounding toward negative infinity.
///
/// Matches a sign-extending hardware shifter: `-5 >> 1 == -3`. Shift
/// distances past the word width give `0` or `-1`.
///
/// ```
/// use fixed_point::shift_right;
///
/// assert_eq!(shift_right(5, 1), 2);
/// assert_eq!(shift_right(-5, 1), -3);
/// assert_eq!(shift_right(-5, 200), -1);
/// ```
#[inline]
pub fn shift_right(raw: i64, shift: u32) -> i64 {
    raw >> shift.min(i64::BITS - 1)
}

/// Adds two raw values and saturates the sum to the format.
#[inline]
pub fn saturating_add(a: i64, b: i64, format: FixedPointFormat) -> i64 {
    saturate(a.saturating_add(b), format)
}

/// Subtracts two raw values and saturates the difference to the format.
#[inline]
pub fn saturating_sub(a: i64, b: i64, format: FixedPointFormat) -> i64 {
    saturate(a.saturating_sub(b), format)
}
