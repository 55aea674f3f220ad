//! bsm-price: print the Black-Scholes call and put price of one quote.
//!
//! With no arguments the sample quote (S=100, K=101, T=5, r=0.01, sigma=0.1)
//! is priced. Values can come from a TOML file (`--config`) and be overridden
//! per field on the command line. Diagnostics go to stderr; stdout carries
//! only the two price lines.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bsm_lib::{MarketParams, OptionKind};

/// Black-Scholes-Merton European option pricer
#[derive(Parser, Debug)]
#[command(name = "bsm-price")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// TOML file with market parameters; missing keys use the sample quote
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Spot price of the underlying
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    time_to_expiry: Option<f64>,

    /// Continuously-compounded risk-free rate
    #[arg(long = "rate", allow_negative_numbers = true)]
    risk_free_rate: Option<f64>,

    /// Annualized volatility
    #[arg(long)]
    volatility: Option<f64>,
}

impl Cli {
    fn market_params(&self) -> Result<MarketParams> {
        let mut params = match &self.config {
            Some(path) => MarketParams::load(path)?,
            None => MarketParams::default(),
        };

        if let Some(spot) = self.spot {
            params.spot = spot;
        }
        if let Some(strike) = self.strike {
            params.strike = strike;
        }
        if let Some(t) = self.time_to_expiry {
            params.time_to_expiry = t;
        }
        if let Some(r) = self.risk_free_rate {
            params.risk_free_rate = r;
        }
        if let Some(vol) = self.volatility {
            params.volatility = vol;
        }
        Ok(params)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "parsed arguments");

    let params = cli.market_params()?;
    info!(
        spot = params.spot,
        strike = params.strike,
        time_to_expiry = params.time_to_expiry,
        risk_free_rate = params.risk_free_rate,
        volatility = params.volatility,
        "pricing quote"
    );

    let call = params
        .quote(OptionKind::Call)
        .context("cannot price call")?
        .price();
    let put = params
        .quote(OptionKind::Put)
        .context("cannot price put")?
        .price();

    println!("Call price : {}", call);
    println!("Put price : {}", put);
    Ok(())
}
