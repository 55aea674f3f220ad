use bsm_lib::{OptionKind, OptionQuote};
use serde::Deserialize;

/// CSV row structure matching the reference price fixture
#[derive(Debug, Deserialize)]
struct CsvRow {
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    kind: String,
    expected_price: f64,
}

/// A quote together with its independently computed reference price
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCase {
    pub quote: OptionQuote,
    pub expected_price: f64,
}

/// Location of the reference price table shipped with the tests
pub const REFERENCE_PRICES: &str = "tests/data/reference_prices.csv";

/// Load reference cases from a CSV file
pub fn load_reference_cases(file_path: &str) -> Result<Vec<ReferenceCase>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut cases = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let kind: OptionKind = row.kind.parse()?;
        let quote = OptionQuote::new(
            row.spot,
            row.strike,
            row.time_to_expiry,
            row.risk_free_rate,
            row.volatility,
            kind,
        )?;
        cases.push(ReferenceCase {
            quote,
            expected_price: row.expected_price,
        });
    }

    Ok(cases)
}

/// Relative difference, falling back to absolute for values near zero
#[allow(dead_code)] // not every test binary uses it
pub fn rel_diff(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() / scale
}
