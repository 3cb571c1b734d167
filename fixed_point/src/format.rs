use core::fmt;

use crate::error::FixedPointError;

/// Description of a signed fixed-point word: integer, fractional and guard bits.
///
/// Raw values in this format are `i64` integers interpreted as
/// `raw / 2^fractional_bits`, limited to the two's-complement range of
/// `total_bits` bits. The guard bits widen the range without adding
/// precision, which is how a hardware datapath keeps headroom for
/// intermediate sums.
///
/// # Examples
///
/// ```
/// use fixed_point::FixedPointFormat;
///
/// let format = FixedPointFormat::new(2, 14, 2)?;
/// assert_eq!(format.total_bits(), 18);
/// assert_eq!(format.max_raw(), (1 << 17) - 1);
/// assert_eq!(format.min_raw(), -(1 << 17));
/// assert_eq!(format.lsb(), 1.0 / 16384.0);
/// # Ok::<(), fixed_point::FixedPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FormatParts"))]
pub struct FixedPointFormat {
    integer_bits: u32,
    fractional_bits: u32,
    guard_bits: u32,
}

impl FixedPointFormat {
    /// Widest supported word. Two in-range raw values always add without
    /// overflowing `i64`.
    pub const MAX_TOTAL_BITS: u32 = 62;

    /// Creates a validated format.
    ///
    /// # Errors
    ///
    /// Fails when the word has no bits at all, no fractional bits, or more
    /// than [`Self::MAX_TOTAL_BITS`] bits.
    ///
    /// ```
    /// use fixed_point::{FixedPointError, FixedPointFormat};
    ///
    /// assert_eq!(
    ///     FixedPointFormat::new(4, 0, 0),
    ///     Err(FixedPointError::ZeroFractionalBits)
    /// );
    /// ```
    pub fn new(
        integer_bits: u32,
        fractional_bits: u32,
        guard_bits: u32,
    ) -> Result<Self, FixedPointError> {
        let total_bits = integer_bits
            .saturating_add(fractional_bits)
            .saturating_add(guard_bits);

        if total_bits == 0 {
            return Err(FixedPointError::ZeroWidth {
                integer: integer_bits,
                fractional: fractional_bits,
                guard: guard_bits,
            });
        }
        if fractional_bits == 0 {
            return Err(FixedPointError::ZeroFractionalBits);
        }
        if total_bits > Self::MAX_TOTAL_BITS {
            return Err(FixedPointError::TooWide {
                total_bits,
                max: Self::MAX_TOTAL_BITS,
            });
        }

        Ok(Self::from_parts(integer_bits, fractional_bits, guard_bits))
    }

    // Callers guarantee the parts are valid.
    pub(crate) const fn from_parts(integer_bits: u32, fractional_bits: u32, guard_bits: u32) -> Self {
        Self {
            integer_bits,
            fractional_bits,
            guard_bits,
        }
    }

    pub const fn integer_bits(&self) -> u32 {
        self.integer_bits
    }

    pub const fn fractional_bits(&self) -> u32 {
        self.fractional_bits
    }

    pub const fn guard_bits(&self) -> u32 {
        self.guard_bits
    }

    /// Width of the raw word, sign bit included.
    pub const fn total_bits(&self) -> u32 {
        self.integer_bits + self.fractional_bits + self.guard_bits
    }

    /// Weight of one raw step, `2^-fractional_bits`.
    pub fn lsb(&self) -> f64 {
        1.0 / self.scale()
    }

    /// Raw value of `1.0`, as a float.
    pub fn scale(&self) -> f64 {
        (1u64 << self.fractional_bits) as f64
    }

    /// Largest raw value, `2^(total_bits - 1) - 1`.
    pub const fn max_raw(&self) -> i64 {
        (1i64 << (self.total_bits() - 1)) - 1
    }

    /// Smallest raw value, `-(2^(total_bits - 1))`.
    pub const fn min_raw(&self) -> i64 {
        -(1i64 << (self.total_bits() - 1))
    }

    /// Largest representable real value.
    pub fn max_value(&self) -> f64 {
        self.max_raw() as f64 / self.scale()
    }

    /// Smallest representable real value.
    pub fn min_value(&self) -> f64 {
        self.min_raw() as f64 / self.scale()
    }
}

impl fmt::Display for FixedPointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Q{}.{} ({} guard, {}-bit)",
            self.integer_bits,
            self.fractional_bits,
            self.guard_bits,
            self.total_bits()
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FormatParts {
    integer_bits: u32,
    fractional_bits: u32,
    guard_bits: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<FormatParts> for FixedPointFormat {
    type Error = FixedPointError;

    fn try_from(parts: FormatParts) -> Result<Self, Self::Error> {
        Self::new(parts.integer_bits, parts.fractional_bits, parts.guard_bits)
    }
}
