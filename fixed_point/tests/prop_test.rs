use fixed_point::{
    FixedPointFormat, dequantize, quantize, saturate, saturating_add, saturating_sub, shift_right,
};
use proptest::prelude::*;

/// Strategy for any valid format, kept narrow enough that raw values stay
/// exact in an f64.
fn any_format() -> impl Strategy<Value = FixedPointFormat> {
    (0u32..8, 1u32..32, 0u32..4)
        .prop_map(|(i, f, g)| FixedPointFormat::new(i, f, g).expect("strategy yields valid formats"))
}

/// Strategy for a format together with a real value inside its range.
fn format_and_representable() -> impl Strategy<Value = (FixedPointFormat, f64)> {
    any_format().prop_flat_map(|format| {
        let min = format.min_value();
        let max = format.max_value();
        (Just(format), min..=max)
    })
}

proptest! {

    // --- saturate is idempotent and always in range ---
    #[test]
    fn saturate_is_idempotent(raw in any::<i64>(), format in any_format()) {
        let once = saturate(raw, format);
        prop_assert_eq!(saturate(once, format), once);
        prop_assert!(once >= format.min_raw());
        prop_assert!(once <= format.max_raw());
    }

    // --- in-range values survive a roundtrip within half an LSB ---
    #[test]
    fn quantize_roundtrip_within_half_lsb((format, value) in format_and_representable()) {
        let recovered = dequantize(quantize(value, format), format);
        prop_assert!((recovered - value).abs() <= format.lsb() / 2.0);
    }

    // --- quantize never leaves the format range, whatever the input ---
    #[test]
    fn quantize_is_always_in_range(value in any::<f64>(), format in any_format()) {
        let raw = quantize(value, format);
        prop_assert!(raw >= format.min_raw() && raw <= format.max_raw());
    }

    // --- out-of-range values clamp to the nearest boundary ---
    #[test]
    fn quantize_clamps_to_nearest_boundary(excess in 1.0f64..1e12, format in any_format()) {
        prop_assert_eq!(quantize(format.max_value() + excess, format), format.max_raw());
        prop_assert_eq!(quantize(format.min_value() - excess, format), format.min_raw());
    }

    // --- the shifter is a floor division by 2^k ---
    #[test]
    fn shift_right_is_floor_division(raw in any::<i64>(), shift in 0u32..63) {
        let expected = raw.div_euclid(1i64 << shift);
        prop_assert_eq!(shift_right(raw, shift), expected);
    }

    // --- saturating add/sub match wide arithmetic followed by a clamp ---
    #[test]
    fn saturating_ops_match_wide_math(a in any::<i64>(), b in any::<i64>(), format in any_format()) {
        let clamp = |v: i128| v.clamp(format.min_raw() as i128, format.max_raw() as i128) as i64;

        prop_assert_eq!(saturating_add(a, b, format), clamp(a as i128 + b as i128));
        prop_assert_eq!(saturating_sub(a, b, format), clamp(a as i128 - b as i128));
    }
}
