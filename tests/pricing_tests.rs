mod test_utils;

use bsm_lib::{norm_cdf, price, price_quotes, OptionKind, OptionQuote, PricingError};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{load_reference_cases, rel_diff, REFERENCE_PRICES};

/// Every row of the reference table is reproduced by both the free function
/// and the quote method.
#[test]
fn test_reference_prices() {
    let cases = load_reference_cases(REFERENCE_PRICES).expect("Failed to load reference prices");
    assert_eq!(cases.len(), 14, "fixture should hold 7 call/put pairs");

    for case in &cases {
        let q = case.quote;
        let via_fn = price(
            q.spot(),
            q.strike(),
            q.time_to_expiry(),
            q.risk_free_rate(),
            q.volatility(),
            q.kind(),
        )
        .expect("reference quote must be valid");

        assert!(
            (via_fn - case.expected_price).abs() < 1e-9,
            "{} S={} K={} T={} r={} vol={}: got {}, expected {}",
            q.kind(),
            q.spot(),
            q.strike(),
            q.time_to_expiry(),
            q.risk_free_rate(),
            q.volatility(),
            via_fn,
            case.expected_price
        );
        assert_eq!(q.price(), via_fn);
    }
}

#[test]
fn test_sample_quote_scenario() {
    let call = price(100.0, 101.0, 5.0, 0.01, 0.1, OptionKind::Call).unwrap();
    let put = price(100.0, 101.0, 5.0, 0.01, 0.1, OptionKind::Put).unwrap();
    assert!((call - 10.82925211880901).abs() < 1e-6);
    assert!((put - 6.903423993381125).abs() < 1e-6);
}

#[test]
fn test_unrecognised_kind_never_prices() {
    let result = "invalid_kind"
        .parse::<OptionKind>()
        .and_then(|kind| price(100.0, 101.0, 5.0, 0.01, 0.1, kind));
    match result {
        Err(PricingError::InvalidArgument(msg)) => assert!(msg.contains("invalid_kind")),
        Ok(value) => panic!("unrecognised kind priced to {}", value),
    }
}

#[test]
fn test_out_of_range_results_are_invalid_argument() {
    let cases = [
        (100.0, 100.0, 1e-300, 0.0, 1e-300, OptionKind::Call),
        (100.0, 101.0, 5.0, -1e300, 0.1, OptionKind::Call),
        (100.0, 101.0, 5.0, -1e300, 0.1, OptionKind::Put),
    ];
    for (s, k, t, r, v, kind) in cases {
        let result = price(s, k, t, r, v, kind);
        assert!(
            matches!(result, Err(PricingError::InvalidArgument(_))),
            "{} S={} K={} T={} r={} vol={}: got {:?}",
            kind,
            s,
            k,
            t,
            r,
            v,
            result
        );
        assert!(OptionQuote::new(s, k, t, r, v, kind).is_err());
    }
}

#[test]
fn test_zero_time_to_expiry_is_invalid_argument() {
    let result = price(100.0, 101.0, 0.0, 0.01, 0.1, OptionKind::Call);
    assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
}

#[test]
fn test_reference_put_call_parity() {
    let cases = load_reference_cases(REFERENCE_PRICES).expect("Failed to load reference prices");

    for case in cases.iter().filter(|c| c.quote.kind() == OptionKind::Call) {
        let call = case.quote;
        let put = call.with_kind(OptionKind::Put);
        let lhs = call.price() - put.price();
        let rhs = call.spot() - call.strike() * (-call.risk_free_rate() * call.time_to_expiry()).exp();
        assert!(
            rel_diff(lhs, rhs) < 1e-9,
            "parity: C-P={} S-Ke^-rT={}",
            lhs,
            rhs
        );
    }
}

#[test]
fn test_prices_within_no_arbitrage_band() {
    let cases = load_reference_cases(REFERENCE_PRICES).expect("Failed to load reference prices");

    for case in &cases {
        let q = case.quote;
        let p = q.price();
        let upper = match q.kind() {
            OptionKind::Call => q.spot(),
            OptionKind::Put => q.strike() * (-q.risk_free_rate() * q.time_to_expiry()).exp(),
        };
        assert!(p >= q.discounted_intrinsic() - 1e-12, "{:?} below lower bound", q);
        assert!(p <= upper + 1e-12, "{:?} above upper bound", q);
    }
}

/// statrs' own erfc is only good to ~1e-12, so compare at the 1e-10 bar.
#[test]
fn test_norm_cdf_matches_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for i in -80..=80 {
        let x = i as f64 * 0.1;
        let ours = norm_cdf(x);
        let theirs = normal.cdf(x);
        assert!(
            (ours - theirs).abs() < 1e-10,
            "N({}) = {} vs statrs {}",
            x,
            ours,
            theirs
        );
    }
}

#[test]
fn test_price_quotes_orders_by_strike_then_kind() {
    let make = |strike: f64, kind| OptionQuote::new(100.0, strike, 0.5, 0.03, 0.25, kind).unwrap();
    let quotes = vec![
        make(110.0, OptionKind::Put),
        make(90.0, OptionKind::Put),
        make(100.0, OptionKind::Call),
        make(90.0, OptionKind::Call),
        make(100.0, OptionKind::Put),
    ];

    let results = price_quotes(&quotes);
    let order: Vec<(f64, OptionKind)> = results.iter().map(|r| (r.strike, r.kind)).collect();
    assert_eq!(
        order,
        vec![
            (90.0, OptionKind::Call),
            (90.0, OptionKind::Put),
            (100.0, OptionKind::Call),
            (100.0, OptionKind::Put),
            (110.0, OptionKind::Put),
        ]
    );

    let itm_call = results[0];
    assert!((itm_call.price - 13.790848961769484).abs() < 1e-9);
    assert!(results.iter().all(|r| r.price.is_finite() && r.price >= 0.0));
}

#[test]
fn test_price_quotes_empty() {
    assert!(price_quotes(&[]).is_empty());
}
