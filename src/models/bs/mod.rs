// Black-Scholes-Merton closed form for European calls and puts on an underlying
// paying no dividends. Inputs are validated before evaluation so that a
// zero expiry or a negative volatility surfaces as `InvalidArgument` rather
// than as NaN/inf in the returned price.

use crate::error::{PricingError, Result};
use crate::models::utils::{discount_factor, norm_cdf, validate_finite, validate_positive};
use crate::pricing::types::OptionKind;

/// Standardized moneyness terms `(d1, d2)` of the Black-Scholes formula.
///
/// No validation is performed; callers must ensure `S`, `K`, `T` and `sigma`
/// are strictly positive.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Check every numeric input against the domain of the closed form.
pub(crate) fn validate_inputs(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> Result<()> {
    validate_positive(spot, "spot")?;
    validate_positive(strike, "strike")?;
    validate_positive(time_to_expiry, "time_to_expiry")?;
    validate_finite(risk_free_rate, "risk_free_rate")?;
    validate_positive(volatility, "volatility")?;
    Ok(())
}

/// Price of a European option under Black-Scholes-Merton assumptions.
///
/// # Arguments
///
/// * `spot` - Current price of the underlying (> 0)
/// * `strike` - Strike price (> 0)
/// * `time_to_expiry` - Time to expiration in years (> 0)
/// * `risk_free_rate` - Continuously-compounded rate, may be negative
/// * `volatility` - Annualized volatility of log-returns (> 0)
/// * `kind` - [`OptionKind::Call`] or [`OptionKind::Put`]
///
/// # Errors
///
/// [`PricingError::InvalidArgument`](crate::PricingError::InvalidArgument) if
/// `spot`, `strike`, `time_to_expiry` or `volatility` is not strictly positive,
/// or if any input is NaN or infinite. A zero expiry is rejected rather than
/// collapsed to intrinsic value. Inputs that are individually valid but drive
/// the closed form out of floating-point range (e.g. `sigma * sqrt(T)`
/// underflowing to zero, or `exp(-rT)` overflowing) are rejected too.
///
/// # Example
///
/// ```rust
/// use bsm_lib::{price, OptionKind};
///
/// let call = price(100.0, 101.0, 5.0, 0.01, 0.1, OptionKind::Call)?;
/// assert!((call - 10.82925211880901).abs() < 1e-9);
/// # Ok::<(), bsm_lib::PricingError>(())
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    kind: OptionKind,
) -> Result<f64> {
    validate_inputs(spot, strike, time_to_expiry, risk_free_rate, volatility)?;
    checked_price(
        spot,
        strike,
        time_to_expiry,
        risk_free_rate,
        volatility,
        kind,
    )
}

/// Evaluate the closed form on validated inputs and reject non-finite output.
#[allow(non_snake_case)]
pub(crate) fn checked_price(
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
    kind: OptionKind,
) -> Result<f64> {
    let value = price_unchecked(S, K, T, r, sigma, kind);
    if !value.is_finite() {
        return Err(PricingError::invalid_argument(format!(
            "{kind} price is not finite ({value}) for spot={S}, strike={K}, \
             time_to_expiry={T}, risk_free_rate={r}, volatility={sigma}"
        )));
    }
    Ok(value)
}

/// Closed-form evaluation on inputs that have already been validated.
#[allow(non_snake_case)]
pub(crate) fn price_unchecked(S: f64, K: f64, T: f64, r: f64, sigma: f64, kind: OptionKind) -> f64 {
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    let df = discount_factor(r, T);
    match kind {
        OptionKind::Call => S * norm_cdf(d1) - K * df * norm_cdf(d2),
        OptionKind::Put => K * df * norm_cdf(-d2) - S * norm_cdf(-d1),
    }
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<f64> {
    price(S, K, T, r, sigma, OptionKind::Call)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<f64> {
    price(S, K, T, r, sigma, OptionKind::Put)
}
