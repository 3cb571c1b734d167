//! Worst-case error measurement over the sampling domain of each mode.
//!
//! Circular mode is sampled along `[-pi/2, pi/2]`, linear mode over a square
//! grid on `[-0.999, 0.999]`. Every sample compares the datapath output with
//! the `f64` reference and the reductions keep the largest absolute error.

use core::f64::consts::FRAC_PI_2;

use fixed_point::FixedPointFormat;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::Cordic;
use crate::error::AnalysisError;
use crate::sweep::ErrorModel;

/// Angle range covered by the circular analysis.
pub const CIRCULAR_DOMAIN: (f64, f64) = (-FRAC_PI_2, FRAC_PI_2);

/// Operand range covered by the linear analysis, on both axes.
pub const LINEAR_DOMAIN: (f64, f64) = (-0.999, 0.999);

/// `count` evenly spaced points from `start` to `stop`, both included.
///
/// Point `i` is `i * step + start` and the last point is pinned to `stop`.
/// A single point is `start`.
///
/// ```
/// use cordic::linspace;
///
/// assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// ```
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| i as f64 * step + start).collect();
            points[count - 1] = stop;
            points
        }
    }
}

#[cfg(feature = "parallel")]
fn map_points<T, U, F>(points: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    points.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_points<T, U, F>(points: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    points.iter().map(f).collect()
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Per-angle absolute errors of circular mode at one iteration count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularErrorProfile {
    pub iterations: u32,
    pub thetas: Vec<f64>,
    pub cos_errors: Vec<f64>,
    pub sin_errors: Vec<f64>,
}

impl CircularErrorProfile {
    /// Largest error over both channels and all angles.
    pub fn max_error(&self) -> f64 {
        max_of(&self.cos_errors).max(max_of(&self.sin_errors))
    }

    pub fn len(&self) -> usize {
        self.thetas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thetas.is_empty()
    }
}

/// Absolute product errors of linear mode over a square operand grid.
///
/// `errors` is row-major: row `i` is operand `a = points[i]`, column `j`
/// is operand `b = points[j]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearErrorGrid {
    pub iterations: u32,
    pub points: Vec<f64>,
    pub errors: Vec<f64>,
}

impl LinearErrorGrid {
    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Error at `a = points[row]`, `b = points[col]`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let size = self.size();
        if row < size && col < size {
            self.errors.get(row * size + col).copied()
        } else {
            None
        }
    }

    /// Iterates over the rows of the matrix, one slice per `a` value.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.errors.chunks(self.size().max(1))
    }

    /// Largest error over the full grid.
    pub fn max_error(&self) -> f64 {
        max_of(&self.errors)
    }
}

/// Samples circular mode at `samples` evenly spaced angles.
///
/// # Errors
///
/// Returns [`AnalysisError::NoSamples`] when `samples` is zero.
pub fn circular_errors(
    iterations: u32,
    format: FixedPointFormat,
    samples: usize,
) -> Result<CircularErrorProfile, AnalysisError> {
    if samples == 0 {
        return Err(AnalysisError::NoSamples {
            what: "circular analysis",
        });
    }

    let unit = Cordic::new(iterations, format);
    let thetas = linspace(CIRCULAR_DOMAIN.0, CIRCULAR_DOMAIN.1, samples);

    let (cos_errors, sin_errors): (Vec<f64>, Vec<f64>) = map_points(&thetas, |&theta| {
        let (cos, sin) = unit.cos_sin(theta);
        ((cos - theta.cos()).abs(), (sin - theta.sin()).abs())
    })
    .into_iter()
    .unzip();

    Ok(CircularErrorProfile {
        iterations,
        thetas,
        cos_errors,
        sin_errors,
    })
}

/// Worst-case circular error over `samples` angles.
pub fn max_error_circular(
    iterations: u32,
    format: FixedPointFormat,
    samples: usize,
) -> Result<f64, AnalysisError> {
    Ok(circular_errors(iterations, format, samples)?.max_error())
}

/// Samples linear mode on a `grid x grid` operand grid.
///
/// # Errors
///
/// Returns [`AnalysisError::NoSamples`] when `grid` is zero.
pub fn linear_errors(
    iterations: u32,
    format: FixedPointFormat,
    grid: usize,
) -> Result<LinearErrorGrid, AnalysisError> {
    if grid == 0 {
        return Err(AnalysisError::NoSamples {
            what: "linear analysis",
        });
    }

    let unit = Cordic::new(iterations, format);
    let points = linspace(LINEAR_DOMAIN.0, LINEAR_DOMAIN.1, grid);

    let errors = map_points(&points, |&a| {
        points
            .iter()
            .map(|&b| (unit.multiply(a, b) - a * b).abs())
            .collect::<Vec<_>>()
    })
    .concat();

    Ok(LinearErrorGrid {
        iterations,
        points,
        errors,
    })
}

/// Worst-case linear error over a `grid x grid` operand grid.
pub fn max_error_linear(
    iterations: u32,
    format: FixedPointFormat,
    grid: usize,
) -> Result<f64, AnalysisError> {
    Ok(linear_errors(iterations, format, grid)?.max_error())
}

/// Circular-mode error model: worst case over `samples` angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularModel {
    pub format: FixedPointFormat,
    pub samples: usize,
}

impl ErrorModel for CircularModel {
    fn worst_case_error(&self, iterations: u32) -> Result<f64, AnalysisError> {
        max_error_circular(iterations, self.format, self.samples)
    }
}

/// Linear-mode error model: worst case over a `grid x grid` operand grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearModel {
    pub format: FixedPointFormat,
    pub grid: usize,
}

impl ErrorModel for LinearModel {
    fn worst_case_error(&self, iterations: u32) -> Result<f64, AnalysisError> {
        max_error_linear(iterations, self.format, self.grid)
    }
}
