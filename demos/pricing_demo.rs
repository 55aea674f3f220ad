// demos/pricing_demo.rs

//! Demonstration of Black-Scholes-Merton pricing over a strike ladder
//!
//! This example shows how to:
//! 1. Load market parameters (TOML file or built-in sample)
//! 2. Build validated call and put quotes across strikes
//! 3. Price them in one batch
//! 4. Check put-call parity on the results
//!
//! Usage:
//!     cargo run --example pricing_demo -- [demos/sample_quote.toml]

use std::env;

use anyhow::Result;
use bsm_lib::{price_quotes, MarketParams, OptionKind, OptionQuote};

fn main() -> Result<()> {
    println!("Black-Scholes-Merton Pricing Demo");
    println!("=================================");

    let params = match env::args().nth(1) {
        Some(path) => MarketParams::load(&path)?,
        None => MarketParams::default(),
    };

    println!("Underlying price: {:.2}", params.spot);
    println!("Expiry:           {:.2} years", params.time_to_expiry);
    println!("Risk-free rate:   {:.2}%", params.risk_free_rate * 100.0);
    println!("Volatility:       {:.2}%", params.volatility * 100.0);

    let quotes = create_strike_ladder(&params)?;
    println!("\nQuotes built: {}", quotes.len());

    let results = price_quotes(&quotes);

    println!("\nPricing Results:");
    println!("{:<8} {:<10} {:<12}", "Type", "Strike", "Price");
    println!("{}", "-".repeat(32));
    for result in &results {
        println!(
            "{:<8} {:<10.2} {:<12.6}",
            result.kind, result.strike, result.price
        );
    }

    // Calls and puts arrive paired by strike
    let discount = (-params.risk_free_rate * params.time_to_expiry).exp();
    let worst_parity_gap = results
        .chunks(2)
        .map(|pair| {
            let (call, put) = (pair[0], pair[1]);
            ((call.price - put.price) - (call.spot - call.strike * discount)).abs()
        })
        .fold(0.0_f64, f64::max);

    println!("\nSummary:");
    println!("  Worst put-call parity gap: {:.3e}", worst_parity_gap);

    Ok(())
}

/// Calls and puts from 80% to 120% of spot in 5% steps
fn create_strike_ladder(params: &MarketParams) -> Result<Vec<OptionQuote>> {
    let mut quotes = Vec::new();
    for step in 0..=8 {
        let strike = params.spot * (0.80 + 0.05 * step as f64);
        for kind in [OptionKind::Call, OptionKind::Put] {
            quotes.push(OptionQuote::new(
                params.spot,
                strike,
                params.time_to_expiry,
                params.risk_free_rate,
                params.volatility,
                kind,
            )?);
        }
    }
    Ok(quotes)
}
