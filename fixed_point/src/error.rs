use thiserror::Error;

/// Errors for fixed-point format construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FixedPointError {
    #[error("fixed-point format needs at least one fractional bit")]
    ZeroFractionalBits,

    #[error("fixed-point format Q{integer}.{fractional} with {guard} guard bits has zero width")]
    ZeroWidth {
        integer: u32,
        fractional: u32,
        guard: u32,
    },

    /// The raw word is carried in an `i64`, so the datapath is capped.
    #[error("fixed-point format is {total_bits} bits wide, at most {max} are supported")]
    TooWide { total_bits: u32, max: u32 },
}
