//! One-call accuracy study: both sweeps, the recommendation, and the detailed
//! error data at the recommended iteration count.

use core::ops::RangeInclusive;

use fixed_point::FixedPointFormat;
use log::info;

use crate::analysis::{
    CircularErrorProfile, CircularModel, LinearErrorGrid, LinearModel, circular_errors,
    linear_errors,
};
use crate::error::AnalysisError;
use crate::sweep::{Recommendation, Sweep, recommend, sweep_model};

/// Parameters of an accuracy study.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Iteration counts to scan, ascending.
    pub iterations: RangeInclusive<u32>,
    /// Angles sampled across `[-pi/2, pi/2]`.
    pub circular_samples: usize,
    /// Points per axis of the linear operand grid.
    pub linear_grid: usize,
    /// Error bound in LSBs of the format.
    pub target_lsb: f64,
}

impl SweepConfig {
    /// Absolute error bound for `format`.
    pub fn target(&self, format: FixedPointFormat) -> f64 {
        self.target_lsb * format.lsb()
    }

    /// Rejects empty sampling domains before any work is done.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.circular_samples == 0 {
            return Err(AnalysisError::NoSamples {
                what: "circular analysis",
            });
        }
        if self.linear_grid == 0 {
            return Err(AnalysisError::NoSamples {
                what: "linear analysis",
            });
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            iterations: 6..=21,
            circular_samples: 2001,
            linear_grid: 41,
            target_lsb: 10.0,
        }
    }
}

/// Everything a report or plot needs from a study.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudyReport {
    pub format: FixedPointFormat,
    pub target: f64,
    pub circular: Sweep,
    pub linear: Sweep,
    pub recommendation: Option<Recommendation>,
    /// Per-angle errors at the recommended N.
    pub circular_profile: Option<CircularErrorProfile>,
    /// Operand-grid errors at the recommended N.
    pub linear_grid: Option<LinearErrorGrid>,
}

/// Runs both mode sweeps and collects the detailed errors at the chosen N.
///
/// # Errors
///
/// Fails if either sample count is zero.
pub fn run_study(format: FixedPointFormat, config: &SweepConfig) -> Result<StudyReport, AnalysisError> {
    config.validate()?;

    let target = config.target(format);
    info!(
        "studying {format}: N in {:?}, target {:.8e} ({} LSB)",
        config.iterations, target, config.target_lsb
    );

    let circular_model = CircularModel {
        format,
        samples: config.circular_samples,
    };
    let linear_model = LinearModel {
        format,
        grid: config.linear_grid,
    };

    info!("circular sweep over {} angles", config.circular_samples);
    let circular = sweep_model(config.iterations.clone(), &circular_model, target)?;
    info!("linear sweep over a {0}x{0} grid", config.linear_grid);
    let linear = sweep_model(config.iterations.clone(), &linear_model, target)?;

    let recommendation = recommend(circular.first_sufficient(), linear.first_sufficient());

    let (circular_profile, linear_grid) = match recommendation {
        Some(rec) => {
            info!("recommended N = {} (K = {:.8})", rec.iterations, rec.gain);
            (
                Some(circular_errors(rec.iterations, format, config.circular_samples)?),
                Some(linear_errors(rec.iterations, format, config.linear_grid)?),
            )
        }
        None => {
            info!("no iteration count satisfies both modes");
            (None, None)
        }
    };

    Ok(StudyReport {
        format,
        target,
        circular,
        linear,
        recommendation,
        circular_profile,
        linear_grid,
    })
}

/// [`run_study`] on a datapath given by its raw bit widths.
///
/// # Errors
///
/// Fails with [`AnalysisError::Format`] if the widths do not describe a valid
/// format, and otherwise as [`run_study`] does.
pub fn run_study_with_widths(
    integer_bits: u32,
    fractional_bits: u32,
    guard_bits: u32,
    config: &SweepConfig,
) -> Result<StudyReport, AnalysisError> {
    let format = FixedPointFormat::new(integer_bits, fractional_bits, guard_bits)?;
    run_study(format, config)
}
