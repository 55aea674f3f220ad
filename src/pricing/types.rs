use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};
use crate::models::bs::{checked_price, price_unchecked, validate_inputs};
use crate::models::utils::discount_factor;

/// Exercise right of a European option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Undiscounted payoff at expiry for the given spot.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Parses `"call"`/`"c"` and `"put"`/`"p"`, ignoring case and surrounding
/// whitespace. Anything else is a [`PricingError::InvalidArgument`].
impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(PricingError::invalid_argument(format!(
                "unrecognised option kind: {s:?} (expected \"call\" or \"put\")"
            ))),
        }
    }
}

/// A validated European option quote.
///
/// Construction through [`OptionQuote::new`] guarantees every field lies in
/// the domain of the Black-Scholes formula and that both the call and the put
/// evaluate to finite prices, so [`OptionQuote::price`] is infallible for
/// either kind (see [`OptionQuote::with_kind`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionQuote {
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    kind: OptionKind,
}

impl OptionQuote {
    /// Validate and build a quote.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidArgument`] when `spot`, `strike`,
    /// `time_to_expiry` or `volatility` is not strictly positive, or when any
    /// numeric input is NaN or infinite, or when the inputs push the call or
    /// put price out of floating-point range.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self> {
        validate_inputs(spot, strike, time_to_expiry, risk_free_rate, volatility)?;
        for k in [OptionKind::Call, OptionKind::Put] {
            checked_price(spot, strike, time_to_expiry, risk_free_rate, volatility, k)?;
        }
        Ok(Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            kind,
        })
    }

    /// Black-Scholes-Merton price of this quote.
    pub fn price(&self) -> f64 {
        price_unchecked(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            self.volatility,
            self.kind,
        )
    }

    /// Payoff against the discounted strike: `max(S - K e^{-rT}, 0)` for a
    /// call, `max(K e^{-rT} - S, 0)` for a put.
    ///
    /// This is the no-arbitrage lower bound of the price and its limit as
    /// volatility goes to zero.
    pub fn discounted_intrinsic(&self) -> f64 {
        let discounted_strike =
            self.strike * discount_factor(self.risk_free_rate, self.time_to_expiry);
        self.kind.intrinsic(self.spot, discounted_strike)
    }

    /// The same contract with the given exercise right.
    pub fn with_kind(&self, kind: OptionKind) -> Self {
        Self { kind, ..*self }
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }
}

/// Lightweight struct holding the pricing output for one quote
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Call or put
    pub kind: OptionKind,
    /// Strike price
    pub strike: f64,
    /// Underlying asset price
    pub spot: f64,
    /// Time to expiration in years
    pub time_to_expiry: f64,
    /// Model option price
    pub price: f64,
}

impl From<&OptionQuote> for PricingResult {
    fn from(quote: &OptionQuote) -> Self {
        Self {
            kind: quote.kind,
            strike: quote.strike,
            spot: quote.spot,
            time_to_expiry: quote.time_to_expiry,
            price: quote.price(),
        }
    }
}
