use fixed_point::FixedPointError;
use thiserror::Error;

/// Errors raised while setting up an accuracy analysis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("{what} needs at least one sample point")]
    NoSamples { what: &'static str },

    #[error("invalid fixed-point format: {0}")]
    Format(#[from] FixedPointError),
}
