//! # cordic
//!
//! A bit-accurate behavioural model of a fixed-point CORDIC datapath, and the
//! tooling to pick the smallest iteration count that meets an error budget.
//!
//! ## Features
//!
//! - Circular rotation mode (cosine/sine) and linear mode (multiply)
//! - Saturating shift-add updates that match a two's-complement datapath
//! - Angle and step LUT generation for any [`FixedPointFormat`]
//! - Worst-case error analysis over the angle range and an operand grid
//! - Iteration sweeps with first-sufficient-N selection
//! - Parallel sampling (feature `parallel`) and `serde` support (feature `serde`, on by default)
//!
//! The crate performs no printing; results are plain data for a report or
//! plotting front end. Progress is emitted through the `log` facade.
//!
//! ## Examples
//!
//! ```
//! use cordic::{Cordic, SweepConfig, max_error_circular, sweep};
//! use fixed_point::scalar_formats::Q2_14_G2;
//!
//! let unit = Cordic::new(16, Q2_14_G2);
//! let (cos, sin) = unit.cos_sin(std::f64::consts::FRAC_PI_4);
//! assert!((cos - sin).abs() < 1e-3);
//!
//! // Smallest N whose worst circular error is within 10 LSB
//! let target = SweepConfig::default().target(Q2_14_G2);
//! let result = sweep(10..=16, |n| max_error_circular(n, Q2_14_G2, 201).unwrap(), target);
//! assert!(result.first_sufficient().is_some());
//! ```
//!
//! [`FixedPointFormat`]: fixed_point::FixedPointFormat

pub mod analysis;
pub mod constants;
pub mod engine;
pub mod error;
pub mod study;
pub mod sweep;

pub use analysis::{
    CIRCULAR_DOMAIN, CircularErrorProfile, CircularModel, LINEAR_DOMAIN, LinearErrorGrid,
    LinearModel, circular_errors, linear_errors, linspace, max_error_circular, max_error_linear,
};
pub use constants::{Lut, LutKind, angle_lut, gain, inverse_gain, step_lut};
pub use engine::{Cordic, CordicState, circular, linear};
pub use error::AnalysisError;
pub use study::{StudyReport, SweepConfig, run_study, run_study_with_widths};
pub use sweep::{ErrorModel, Recommendation, Sweep, SweepRecord, recommend, sweep, sweep_model};
