//! Iteration-count sweeps and the minimum-sufficient-N search.

use core::ops::RangeInclusive;

use log::{debug, info};

use crate::constants::{gain, inverse_gain};
use crate::error::AnalysisError;

/// Anything that maps an iteration count to a worst-case error.
///
/// Implemented by the analysis models and by any `Fn(u32) -> f64` closure.
pub trait ErrorModel {
    fn worst_case_error(&self, iterations: u32) -> Result<f64, AnalysisError>;
}

impl<F> ErrorModel for F
where
    F: Fn(u32) -> f64,
{
    fn worst_case_error(&self, iterations: u32) -> Result<f64, AnalysisError> {
        Ok(self(iterations))
    }
}

/// Outcome of evaluating one iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRecord {
    pub iterations: u32,
    pub worst_case_error: f64,
    pub meets_target: bool,
}

/// Records of a sweep in ascending iteration order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sweep {
    target: f64,
    records: Vec<SweepRecord>,
    first_sufficient: Option<u32>,
}

impl Sweep {
    fn new(target: f64) -> Self {
        Self {
            target,
            records: Vec::new(),
            first_sufficient: None,
        }
    }

    fn record(&mut self, iterations: u32, worst_case_error: f64) {
        let meets_target = worst_case_error <= self.target;
        if meets_target && self.first_sufficient.is_none() {
            self.first_sufficient = Some(iterations);
        }

        debug!(
            "N={iterations:2} max_err={worst_case_error:.8e}{}",
            if meets_target { " OK" } else { "" }
        );

        self.records.push(SweepRecord {
            iterations,
            worst_case_error,
            meets_target,
        });
    }

    fn finish(self) -> Self {
        match self.first_sufficient {
            Some(n) => info!("minimum sufficient N = {n} (target {:.8e})", self.target),
            None => info!("no N reaches target {:.8e}", self.target),
        }
        self
    }

    /// The error bound the records were checked against.
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn records(&self) -> &[SweepRecord] {
        &self.records
    }

    /// First iteration count, in ascending order, whose error met the target.
    ///
    /// This need not be the count with the smallest error: quantization noise
    /// makes the error curve non-monotonic.
    pub fn first_sufficient(&self) -> Option<u32> {
        self.first_sufficient
    }

    /// The record with the smallest error, earliest on ties.
    pub fn best(&self) -> Option<&SweepRecord> {
        self.records
            .iter()
            .reduce(|best, r| if r.worst_case_error < best.worst_case_error { r } else { best })
    }
}

/// Evaluates `err_fn` for every iteration count in `range`, in ascending order.
///
/// ```
/// use cordic::sweep;
///
/// let result = sweep(1..=8, |n| 1.0 / n as f64, 0.25);
/// assert_eq!(result.records().len(), 8);
/// assert_eq!(result.first_sufficient(), Some(4));
///
/// let unreachable = sweep(1..=8, |n| 1.0 / n as f64, 0.01);
/// assert_eq!(unreachable.first_sufficient(), None);
/// ```
pub fn sweep<F>(range: RangeInclusive<u32>, mut err_fn: F, target: f64) -> Sweep
where
    F: FnMut(u32) -> f64,
{
    let mut sweep = Sweep::new(target);
    for n in range {
        sweep.record(n, err_fn(n));
    }
    sweep.finish()
}

/// Like [`sweep`], driven by an [`ErrorModel`].
///
/// # Errors
///
/// Propagates the first error the model reports.
pub fn sweep_model<M>(
    range: RangeInclusive<u32>,
    model: &M,
    target: f64,
) -> Result<Sweep, AnalysisError>
where
    M: ErrorModel + ?Sized,
{
    let mut sweep = Sweep::new(target);
    for n in range {
        sweep.record(n, model.worst_case_error(n)?);
    }
    Ok(sweep.finish())
}

/// Iteration count chosen for hardware, with its gain constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    pub iterations: u32,
    pub gain: f64,
    pub inverse_gain: f64,
}

impl Recommendation {
    pub fn for_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            gain: gain(iterations),
            inverse_gain: inverse_gain(iterations),
        }
    }
}

/// Combines the per-mode results: a shared datapath needs the larger N.
///
/// Returns `None` unless both modes found a sufficient count.
pub fn recommend(circular: Option<u32>, linear: Option<u32>) -> Option<Recommendation> {
    let (circular, linear) = (circular?, linear?);
    Some(Recommendation::for_iterations(circular.max(linear)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decreasing_function_crosses_exactly() {
        let result = sweep(1..=20, |n| 100.0 / f64::from(n), 10.0);
        assert_eq!(result.first_sufficient(), Some(10));
        assert!(!result.records()[8].meets_target);
        assert!(result.records()[9].meets_target);
    }

    #[test]
    fn test_target_is_inclusive() {
        let result = sweep(0..=5, |n| 5.0 - f64::from(n), 2.0);
        assert_eq!(result.first_sufficient(), Some(3));
    }

    #[test]
    fn test_unreachable_target_not_found() {
        let result = sweep(6..=21, |n| 1.0 + 1.0 / f64::from(n), 0.5);
        assert_eq!(result.first_sufficient(), None);
        assert_eq!(result.records().len(), 16);
        assert!(result.records().iter().all(|r| !r.meets_target));
    }

    #[test]
    fn test_first_not_global_minimum() {
        let errors = [9.0, 4.0, 2.5, 1.0, 3.0, 0.5];
        let result = sweep(0..=5, |n| errors[n as usize], 3.0);
        assert_eq!(result.first_sufficient(), Some(2));
        assert_eq!(result.best().map(|r| r.iterations), Some(5));

        // Records after the first hit still report their own status.
        let flags: Vec<bool> = result.records().iter().map(|r| r.meets_target).collect();
        assert_eq!(flags, vec![false, false, true, true, true, true]);
    }

    #[test]
    fn test_records_ascending() {
        let result = sweep(6..=21, |n| f64::from(n), 0.0);
        let ns: Vec<u32> = result.records().iter().map(|r| r.iterations).collect();
        assert_eq!(ns, (6..=21).collect::<Vec<_>>());
        assert_eq!(result.target(), 0.0);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_empty_range() {
        let result = sweep(10..=5, |_| 0.0, 1.0);
        assert!(result.records().is_empty());
        assert_eq!(result.first_sufficient(), None);
        assert!(result.best().is_none());
    }

    #[test]
    fn test_sweep_is_evaluated_in_order() {
        let mut seen = Vec::new();
        sweep(3..=7, |n| {
            seen.push(n);
            0.0
        }, 1.0);
        assert_eq!(seen, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_sweep_model_with_closure() {
        let model = |n: u32| 1.0 / f64::from(n);
        let result = sweep_model(1..=10, &model, 0.2).unwrap();
        assert_eq!(result.first_sufficient(), Some(5));
    }

    struct Failing;

    impl ErrorModel for Failing {
        fn worst_case_error(&self, _iterations: u32) -> Result<f64, AnalysisError> {
            Err(AnalysisError::NoSamples { what: "test model" })
        }
    }

    #[test]
    fn test_sweep_model_propagates_errors() {
        assert_eq!(
            sweep_model(1..=3, &Failing, 1.0),
            Err(AnalysisError::NoSamples { what: "test model" })
        );
    }

    #[test]
    fn test_recommend_takes_larger() {
        let rec = recommend(Some(13), Some(14)).unwrap();
        assert_eq!(rec.iterations, 14);
        assert_eq!(rec.gain, gain(14));
        assert!((rec.gain * rec.inverse_gain - 1.0).abs() < 1e-15);
        assert_eq!(recommend(Some(20), Some(9)).map(|r| r.iterations), Some(20));
    }

    #[test]
    fn test_recommend_needs_both_modes() {
        assert_eq!(recommend(Some(13), None), None);
        assert_eq!(recommend(None, Some(14)), None);
        assert_eq!(recommend(None, None), None);
    }
}
