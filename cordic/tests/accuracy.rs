//! End-to-end accuracy checks on the default Q2.14 datapath with 2 guard bits.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use cordic::{
    Cordic, SweepConfig, circular, gain, linear, max_error_circular, max_error_linear, run_study,
};
use fixed_point::scalar_formats::Q2_14_G2;

/// 10 LSB at 14 fractional bits.
const TARGET: f64 = 6.103515625e-4;

#[test]
fn zero_angle_is_within_target() {
    for n in 12..=24 {
        let (cos, sin) = circular(0.0, n, Q2_14_G2);
        assert!((cos - 1.0).abs() <= TARGET, "N={n}: cos(0) = {cos}");
        assert!(sin.abs() <= TARGET, "N={n}: sin(0) = {sin}");
    }
}

#[test]
fn zero_angle_residue_with_few_iterations() {
    // Eight micro-rotations leave a visible sine residue at theta = 0.
    let (_, sin) = circular(0.0, 8, Q2_14_G2);
    assert!(sin.abs() > TARGET);
}

#[test]
fn quarter_turn_scenario() {
    let (cos, sin) = circular(FRAC_PI_4, 16, Q2_14_G2);
    assert!((cos - 0.70710678).abs() <= TARGET);
    assert!((sin - 0.70710678).abs() <= TARGET);
}

#[test]
fn linear_product_scenario() {
    let product = linear(0.5, 0.5, 16, Q2_14_G2);
    assert!((product - 0.25).abs() <= TARGET);
}

#[test]
fn boundary_angles_are_stable() {
    for n in 12..=24 {
        let (cos, sin) = circular(FRAC_PI_2, n, Q2_14_G2);
        assert!(cos.abs() <= TARGET, "N={n}: cos(pi/2) = {cos}");
        assert!((sin - 1.0).abs() <= TARGET, "N={n}: sin(pi/2) = {sin}");

        let (cos, sin) = circular(-FRAC_PI_2, n, Q2_14_G2);
        assert!(cos.abs() <= TARGET, "N={n}: cos(-pi/2) = {cos}");
        assert!((sin + 1.0).abs() <= TARGET, "N={n}: sin(-pi/2) = {sin}");
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    for theta in [-1.5, -0.3, 0.0, 0.8, 1.57] {
        let a = circular(theta, 18, Q2_14_G2);
        let b = circular(theta, 18, Q2_14_G2);
        assert_eq!(a.0.to_bits(), b.0.to_bits());
        assert_eq!(a.1.to_bits(), b.1.to_bits());
    }

    let unit = Cordic::new(18, Q2_14_G2);
    assert_eq!(unit.multiply_raw(-0.6, 0.45), unit.multiply_raw(-0.6, 0.45));
}

#[test]
fn worst_case_errors_match_reference_model() {
    let circular_6 = max_error_circular(6, Q2_14_G2, 2001).unwrap();
    assert!((circular_6 - 0.030616188225532803).abs() < 1e-12);

    let circular_13 = max_error_circular(13, Q2_14_G2, 2001).unwrap();
    assert!((circular_13 - 0.0006024890314413889).abs() < 1e-12);

    assert_eq!(max_error_linear(6, Q2_14_G2, 41).unwrap(), 0.03125);
    assert_eq!(max_error_linear(12, Q2_14_G2, 41).unwrap(), 0.0008544921875);
}

#[test]
fn default_study_reproduces_reference_sweep() {
    let report = run_study(Q2_14_G2, &SweepConfig::default()).unwrap();

    assert_eq!(report.target, TARGET);
    assert_eq!(report.circular.records().len(), 16);
    assert_eq!(report.linear.records().len(), 16);

    assert_eq!(report.circular.first_sufficient(), Some(13));
    assert_eq!(report.linear.first_sufficient(), Some(14));

    let rec = report.recommendation.expect("both modes reach 10 LSB");
    assert_eq!(rec.iterations, 14);
    assert_eq!(rec.gain, gain(14));

    // Error grows again past the sweet spot: the minimum is not monotonic.
    let circular_ok: Vec<u32> = report
        .circular
        .records()
        .iter()
        .filter(|r| r.meets_target)
        .map(|r| r.iterations)
        .collect();
    assert_eq!(circular_ok, (13..=19).collect::<Vec<_>>());

    let linear_ok: Vec<u32> = report
        .linear
        .records()
        .iter()
        .filter(|r| r.meets_target)
        .map(|r| r.iterations)
        .collect();
    assert_eq!(linear_ok, vec![14, 15, 16, 17]);

    let profile = report.circular_profile.expect("profile at chosen N");
    assert_eq!(profile.iterations, 14);
    assert_eq!(profile.len(), 2001);
    assert!(profile.max_error() <= TARGET);

    let grid = report.linear_grid.expect("grid at chosen N");
    assert_eq!(grid.size(), 41);
    assert_eq!(grid.errors.len(), 41 * 41);
    assert!(grid.max_error() <= TARGET);
}

#[test]
fn rom_image_at_chosen_iterations() {
    let unit = Cordic::new(14, Q2_14_G2);
    let angles = unit.angle_lut();
    let bytes = angles.as_bytes();

    assert_eq!(bytes.len(), 14 * 8);
    assert_eq!(&bytes[..8], &12868i64.to_ne_bytes());
    assert_eq!(unit.step_lut().as_bytes().len(), bytes.len());
}
