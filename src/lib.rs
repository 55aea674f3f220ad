//! # bsm-lib: Black-Scholes-Merton European Option Pricing
//!
//! `bsm-lib` computes the closed-form Black-Scholes-Merton price of European
//! calls and puts from spot, strike, time to expiry, risk-free rate and
//! volatility.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: [`price`] for calls and puts
//! - **Self-contained normal CDF**: erfc-based, accurate well below 1e-10
//! - **Validated inputs**: out-of-domain values return [`PricingError::InvalidArgument`]
//!   instead of NaN or infinity
//! - **Closed option kind**: [`OptionKind`] is an enum; strings are parsed at the
//!   boundary and anything other than call/put is rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{price, OptionKind};
//!
//! let call = price(100.0, 101.0, 5.0, 0.01, 0.1, OptionKind::Call)?;
//! let put = price(100.0, 101.0, 5.0, 0.01, 0.1, "put".parse()?)?;
//!
//! // Put-call parity: C - P = S - K e^{-rT}
//! let parity = 100.0 - 101.0 * (-0.01_f64 * 5.0).exp();
//! assert!((call - put - parity).abs() < 1e-9);
//! # Ok::<(), bsm_lib::PricingError>(())
//! ```
//!
//! ## Domain Policy
//!
//! Spot, strike, time to expiry and volatility must be strictly positive and
//! finite; the risk-free rate may be any finite number. A zero time to expiry
//! is an error, not a request for intrinsic value.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use std::cmp::Ordering;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};

// Pricing functions
pub use models::bs::{bs_call_price, bs_put_price, d1_d2, price};
pub use models::utils::norm_cdf;

// Quote types
pub use pricing::types::{OptionKind, OptionQuote, PricingResult};

// Configuration
#[cfg(feature = "serde")]
pub use pricing::config::MarketParams;

/// Price a batch of validated quotes.
///
/// Results are sorted by strike in ascending order, calls before puts at the
/// same strike.
///
/// # Example
///
/// ```rust
/// use bsm_lib::{price_quotes, OptionKind, OptionQuote};
///
/// let quotes = [
///     OptionQuote::new(100.0, 110.0, 1.0, 0.02, 0.25, OptionKind::Put)?,
///     OptionQuote::new(100.0, 90.0, 1.0, 0.02, 0.25, OptionKind::Call)?,
/// ];
/// let results = price_quotes(&quotes);
/// assert_eq!(results[0].strike, 90.0);
/// assert_eq!(results[1].kind, OptionKind::Put);
/// # Ok::<(), bsm_lib::PricingError>(())
/// ```
pub fn price_quotes(quotes: &[OptionQuote]) -> Vec<PricingResult> {
    let mut results: Vec<PricingResult> = quotes.iter().map(PricingResult::from).collect();

    results.sort_by(|a, b| {
        a.strike
            .partial_cmp(&b.strike)
            .unwrap_or(Ordering::Equal)
            .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
    });
    results
}

fn kind_rank(kind: OptionKind) -> u8 {
    match kind {
        OptionKind::Call => 0,
        OptionKind::Put => 1,
    }
}
