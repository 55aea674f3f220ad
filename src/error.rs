//! Error type returned by the pricing functions.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Failures raised while validating pricing inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// An input is outside the domain of the Black-Scholes formula
    /// (non-positive spot, strike, expiry or volatility, non-finite values,
    /// or an unrecognised option kind).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PricingError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
