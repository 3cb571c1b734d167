//! Common fixed-point datapath formats.
//!
//! The naming convention is `QI_F` for I integer bits and F fractional bits,
//! with a `_GG` suffix for G guard bits.

use crate::FixedPointFormat;

/// Q2.14 with 2 guard bits, the default 18-bit CORDIC datapath.
///
/// Range: [-8.0, 7.99993896484375]
/// Precision: ~0.000061035
pub const Q2_14_G2: FixedPointFormat = FixedPointFormat::from_parts(2, 14, 2);

/// Q0.15 with 1 guard bit, the classic 16-bit Q15 word.
///
/// Range: [-1.0, 0.999969482]
/// Precision: ~0.000030518
pub const Q0_15_G1: FixedPointFormat = FixedPointFormat::from_parts(0, 15, 1);

/// Q2.30 with 2 guard bits, a 34-bit high-precision datapath.
///
/// Range: [-8.0, 7.999999999]
/// Precision: ~0.000000001
pub const Q2_30_G2: FixedPointFormat = FixedPointFormat::from_parts(2, 30, 2);
