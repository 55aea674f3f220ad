use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::pricing::types::{OptionKind, OptionQuote};

/// Market inputs shared by the call and the put of a quote pair.
///
/// Every field falls back to the sample quote (S=100, K=101, T=5y, r=1%,
/// sigma=10%) when absent from the TOML document:
///
/// ```toml
/// spot = 100.0
/// strike = 101.0
/// time_to_expiry = 5.0
/// risk_free_rate = 0.01
/// volatility = 0.1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketParams {
    #[serde(default = "default_spot")]
    pub spot: f64,

    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Years until expiry
    #[serde(default = "default_time_to_expiry")]
    pub time_to_expiry: f64,

    /// Continuously-compounded, may be negative
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    #[serde(default = "default_volatility")]
    pub volatility: f64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            time_to_expiry: default_time_to_expiry(),
            risk_free_rate: default_risk_free_rate(),
            volatility: default_volatility(),
        }
    }
}

impl MarketParams {
    /// Parse market parameters from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse market parameters")
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let params = Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?params, "loaded market parameters");
        Ok(params)
    }

    /// Build a validated quote of the given kind from these parameters.
    pub fn quote(&self, kind: OptionKind) -> crate::Result<OptionQuote> {
        OptionQuote::new(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            self.volatility,
            kind,
        )
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    101.0
}

fn default_time_to_expiry() -> f64 {
    5.0
}

fn default_risk_free_rate() -> f64 {
    0.01
}

fn default_volatility() -> f64 {
    0.1
}
