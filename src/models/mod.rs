pub mod bs;

/// Numerical helpers shared by the pricing formulas
pub mod utils {
    use crate::error::{PricingError, Result};
    use std::f64::consts::SQRT_2;

    /// Standard normal cumulative distribution function.
    ///
    /// Evaluated as `0.5 * erfc(-x / sqrt(2))`, which keeps full relative
    /// precision deep in the lower tail where `1 + erf(x)` would cancel.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }

    /// Continuously-compounded discount factor `exp(-r * t)`
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }

    /// Reject NaN, infinities, zero and negatives.
    pub(crate) fn validate_positive(value: f64, name: &str) -> Result<f64> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PricingError::invalid_argument(format!(
                "{name} must be positive and finite, got {value}"
            )));
        }
        Ok(value)
    }

    /// Reject NaN and infinities; zero and negatives are allowed.
    pub(crate) fn validate_finite(value: f64, name: &str) -> Result<f64> {
        if !value.is_finite() {
            return Err(PricingError::invalid_argument(format!(
                "{name} must be finite, got {value}"
            )));
        }
        Ok(value)
    }

}
