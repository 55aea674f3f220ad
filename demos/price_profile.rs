// Example: price_profile.rs
// Draws call and put prices against spot for one strike, together with the
// discounted intrinsic value they converge to as volatility vanishes.
//
// Usage:
//     cargo run --example price_profile -- [config.toml]
//
// The output image will be written to price_profile.svg in the working directory.

use std::env;

use anyhow::{anyhow, Result};
use bsm_lib::{MarketParams, OptionKind, OptionQuote};
use plotters::prelude::*;

fn main() -> Result<()> {
    let params = match env::args().nth(1) {
        Some(path) => MarketParams::load(&path)?,
        None => MarketParams::default(),
    };

    let spot_min = params.strike * 0.5;
    let spot_max = params.strike * 1.5;
    let steps = 250;

    let mut call_line = Vec::with_capacity(steps + 1);
    let mut put_line = Vec::with_capacity(steps + 1);
    let mut call_floor = Vec::with_capacity(steps + 1);
    let mut put_floor = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let spot = spot_min + (spot_max - spot_min) * (i as f64) / (steps as f64);
        let call = OptionQuote::new(
            spot,
            params.strike,
            params.time_to_expiry,
            params.risk_free_rate,
            params.volatility,
            OptionKind::Call,
        )?;
        let put = call.with_kind(OptionKind::Put);

        call_line.push((spot, call.price()));
        put_line.push((spot, put.price()));
        call_floor.push((spot, call.discounted_intrinsic()));
        put_floor.push((spot, put.discounted_intrinsic()));
    }

    let y_max = call_line
        .iter()
        .chain(put_line.iter())
        .map(|&(_, p)| p)
        .fold(0.0_f64, f64::max)
        * 1.05;

    let root = SVGBackend::new("price_profile.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Black-Scholes price vs spot | K={:.2} T={:.2}y r={:.2}% vol={:.1}%",
                params.strike,
                params.time_to_expiry,
                params.risk_free_rate * 100.0,
                params.volatility * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_min..spot_max, 0.0..y_max)
        .map_err(|e| anyhow!("{e}"))?;

    chart
        .configure_mesh()
        .x_desc("Spot")
        .y_desc("Option price")
        .draw()
        .map_err(|e| anyhow!("{e}"))?;

    chart
        .draw_series(std::iter::once(PathElement::new(call_line, RED)))
        .map_err(|e| anyhow!("{e}"))?
        .label("call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(std::iter::once(PathElement::new(put_line, BLUE)))
        .map_err(|e| anyhow!("{e}"))?
        .label("put")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // Lower bounds, dashed-looking thin lines
    chart
        .draw_series(std::iter::once(PathElement::new(
            call_floor,
            RED.mix(0.4).stroke_width(1),
        )))
        .map_err(|e| anyhow!("{e}"))?;
    chart
        .draw_series(std::iter::once(PathElement::new(
            put_floor,
            BLUE.mix(0.4).stroke_width(1),
        )))
        .map_err(|e| anyhow!("{e}"))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| anyhow!("{e}"))?;

    root.present().map_err(|e| anyhow!("{e}"))?;
    println!("Chart saved to price_profile.svg");
    Ok(())
}
