//! Design-time CORDIC constants: the rotation gain and the per-iteration LUTs.

use fixed_point::{FixedPointFormat, quantize};

/// Gain of `iterations` circular micro-rotations, `prod sqrt(1 + 2^-2k)`.
///
/// Computed in full `f64` precision. `gain(0) == 1.0` and the sequence
/// increases toward ~1.6467602.
///
/// ```
/// use cordic::gain;
///
/// assert_eq!(gain(0), 1.0);
/// assert_eq!(gain(1), 2f64.sqrt());
/// assert!(gain(32) < 1.6467606);
/// ```
pub fn gain(iterations: u32) -> f64 {
    (0..iterations)
        .map(|k| (1.0 + negative_power(0.25, k)).sqrt())
        .product()
}

// `base^k` for `base < 1`, with the exponent clamped instead of overflowing.
fn negative_power(base: f64, k: u32) -> f64 {
    base.powi(k.min(i32::MAX as u32) as i32)
}

/// Reciprocal gain, the pre-scale loaded into `x` before rotating.
pub fn inverse_gain(iterations: u32) -> f64 {
    1.0 / gain(iterations)
}

/// Which table a [`Lut`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LutKind {
    /// `atan(2^-k)`, driving circular mode.
    Angle,
    /// `2^-k`, driving linear mode.
    Step,
}

/// A quantized per-iteration constant table, one raw entry per iteration.
///
/// # Examples
///
/// ```
/// use cordic::angle_lut;
/// use fixed_point::scalar_formats::Q2_14_G2;
///
/// let lut = angle_lut(4, Q2_14_G2);
/// assert_eq!(lut.as_slice(), &[12868, 7596, 4014, 2037]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lut {
    kind: LutKind,
    format: FixedPointFormat,
    entries: Vec<i64>,
}

impl Lut {
    fn generate(kind: LutKind, iterations: u32, format: FixedPointFormat) -> Self {
        let entries = (0..iterations)
            .map(|k| {
                let step = negative_power(0.5, k);
                let value = match kind {
                    LutKind::Angle => step.atan(),
                    LutKind::Step => step,
                };
                quantize(value, format)
            })
            .collect();

        Self {
            kind,
            format,
            entries,
        }
    }

    pub fn kind(&self) -> LutKind {
        self.kind
    }

    /// The format the entries were quantized in.
    pub fn format(&self) -> FixedPointFormat {
        self.format
    }

    /// Returns the number of entries, equal to the iteration count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table was generated for zero iterations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the raw entry for iteration `k`, or `None` if out of bounds.
    pub fn get(&self, k: usize) -> Option<i64> {
        self.entries.get(k).copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.entries
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = i64> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the raw words as native-endian bytes, e.g. for a ROM image.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.entries)
    }
}

/// Generates the circular-mode table `quantize(atan(2^-k))`.
pub fn angle_lut(iterations: u32, format: FixedPointFormat) -> Lut {
    Lut::generate(LutKind::Angle, iterations, format)
}

/// Generates the linear-mode table `quantize(2^-k)`.
pub fn step_lut(iterations: u32, format: FixedPointFormat) -> Lut {
    Lut::generate(LutKind::Step, iterations, format)
}
