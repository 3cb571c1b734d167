//! Bit-accurate CORDIC datapath for circular rotation and linear multiply.
//!
//! Every update goes through the same saturating add/sub and arithmetic
//! shifter a hardware implementation would use, so results match the
//! register-level behaviour bit for bit.

use fixed_point::{FixedPointFormat, dequantize, quantize, saturating_add, saturating_sub, shift_right};

use crate::constants::{Lut, angle_lut, inverse_gain, step_lut};

/// Register contents of the datapath, as raw fixed-point words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CordicState {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// Rotation direction. A residual of exactly zero rotates positively.
#[inline]
fn direction(z: i64) -> i64 {
    if z >= 0 { 1 } else { -1 }
}

impl CordicState {
    /// One circular micro-rotation. `x` and `y` both read the pre-update state.
    #[inline]
    fn rotate(self, k: u32, angle: i64, format: FixedPointFormat) -> Self {
        let d = direction(self.z);
        Self {
            x: saturating_sub(self.x, d * shift_right(self.y, k), format),
            y: saturating_add(self.y, d * shift_right(self.x, k), format),
            z: saturating_sub(self.z, d * angle, format),
        }
    }

    /// One linear step; `x` is left untouched.
    #[inline]
    fn accumulate(self, k: u32, step: i64, format: FixedPointFormat) -> Self {
        let d = direction(self.z);
        Self {
            x: self.x,
            y: saturating_add(self.y, d * shift_right(self.x, k), format),
            z: saturating_sub(self.z, d * step, format),
        }
    }
}

/// A CORDIC unit configured for a fixed iteration count and word format.
///
/// Both LUTs and the `1/K` pre-scale are generated once at construction, so
/// one `Cordic` can evaluate many inputs. Results are identical to the
/// free functions [`circular`] and [`linear`].
///
/// # Examples
///
/// ```
/// use cordic::Cordic;
/// use fixed_point::scalar_formats::Q2_14_G2;
///
/// let unit = Cordic::new(16, Q2_14_G2);
/// let (cos, sin) = unit.cos_sin(std::f64::consts::FRAC_PI_6);
/// assert!((cos - 0.8660254).abs() < 6.1e-4);
/// assert!((sin - 0.5).abs() < 6.1e-4);
///
/// let product = unit.multiply(0.5, -0.5);
/// assert!((product + 0.25).abs() < 6.1e-4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cordic {
    iterations: u32,
    format: FixedPointFormat,
    x0: i64,
    angles: Lut,
    steps: Lut,
}

impl Cordic {
    pub fn new(iterations: u32, format: FixedPointFormat) -> Self {
        Self {
            iterations,
            format,
            x0: quantize(inverse_gain(iterations), format),
            angles: angle_lut(iterations, format),
            steps: step_lut(iterations, format),
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn format(&self) -> FixedPointFormat {
        self.format
    }

    /// Quantized `1/K` loaded into `x` at the start of a rotation.
    pub fn prescale(&self) -> i64 {
        self.x0
    }

    pub fn angle_lut(&self) -> &Lut {
        &self.angles
    }

    pub fn step_lut(&self) -> &Lut {
        &self.steps
    }

    /// Runs circular rotation mode and returns the final register state.
    ///
    /// No quadrant correction is applied: angles outside `[-pi/2, pi/2]`
    /// produce a defined but inaccurate result.
    pub fn rotate_raw(&self, theta: f64) -> CordicState {
        let start = CordicState {
            x: self.x0,
            y: 0,
            z: quantize(theta, self.format),
        };

        (0..self.iterations)
            .zip(self.angles.iter())
            .fold(start, |state, (k, angle)| state.rotate(k, angle, self.format))
    }

    /// Returns `(cos(theta), sin(theta))` as computed by the datapath.
    pub fn cos_sin(&self, theta: f64) -> (f64, f64) {
        let state = self.rotate_raw(theta);
        (dequantize(state.x, self.format), dequantize(state.y, self.format))
    }

    /// Runs linear mode on `a * b` and returns the final register state.
    pub fn multiply_raw(&self, a: f64, b: f64) -> CordicState {
        let start = CordicState {
            x: quantize(a, self.format),
            y: 0,
            z: quantize(b, self.format),
        };

        (0..self.iterations)
            .zip(self.steps.iter())
            .fold(start, |state, (k, step)| state.accumulate(k, step, self.format))
    }

    /// Returns the datapath estimate of `a * b`.
    ///
    /// Accuracy falls off as `|b|` approaches 1, since the shrinking steps
    /// cannot drive `z` to zero within the iteration budget.
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        dequantize(self.multiply_raw(a, b).y, self.format)
    }
}

/// Circular rotation mode: returns `(cos(theta), sin(theta))`.
pub fn circular(theta: f64, iterations: u32, format: FixedPointFormat) -> (f64, f64) {
    Cordic::new(iterations, format).cos_sin(theta)
}

/// Linear mode: returns an estimate of `a * b`.
pub fn linear(a: f64, b: f64, iterations: u32, format: FixedPointFormat) -> f64 {
    Cordic::new(iterations, format).multiply(a, b)
}
