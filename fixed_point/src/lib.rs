//! # fixed_point
//!
//! Bit-accurate signed fixed-point arithmetic with runtime-configurable word
//! formats, modelled on a saturating hardware datapath.
//!
//! ## Features
//!
//! - Immutable [`FixedPointFormat`] with integer, fractional and guard bits
//! - Round-to-nearest quantization that saturates instead of wrapping
//! - Two's-complement arithmetic shift and saturating add/sub on raw words
//! - Common datapath presets in [`scalar_formats`]
//! - `serde` support for formats (feature `serde`)
//!
//! ## Examples
//!
//! ```
//! use fixed_point::{FixedPointFormat, dequantize, quantize};
//!
//! // Q2.14 with two guard bits: an 18-bit word
//! let format = FixedPointFormat::new(2, 14, 2)?;
//!
//! let raw = quantize(0.70710678, format);
//! assert_eq!(raw, 11585);
//! assert!((dequantize(raw, format) - 0.70710678).abs() <= format.lsb() / 2.0);
//!
//! // Out-of-range values clamp to the boundary
//! assert_eq!(quantize(-20.0, format), format.min_raw());
//! # Ok::<(), fixed_point::FixedPointError>(())
//! ```

pub mod arithmetic;
pub mod error;
pub mod format;
pub mod scalar_formats;

pub use arithmetic::{dequantize, quantize, saturate, saturating_add, saturating_sub, shift_right};
pub use error::FixedPointError;
pub use format::FixedPointFormat;
