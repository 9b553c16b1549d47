use approx::assert_relative_eq;
use fincalc::error::CalcError;
use fincalc::interest::annuity::future_value_annuity;
use fincalc::interest::compounding::compound_interest;
use fincalc::lending::amortization::monthly_payment;
use fincalc::performance::returns::investment_return;
use fincalc::portfolio::aggregation::portfolio_value;
use fincalc::portfolio::position::Position;
use fincalc::risk::assessment::risk_assessment;

/// Full retirement-planning scenario: savings growth, annuity stream,
/// portfolio aggregation, risk assessment.
#[test]
fn full_retirement_scenario() {
    // $10,000 lump sum at 5% compounded quarterly for 10 years.
    let lump_sum = compound_interest(10_000.0, 0.05, 10.0, 4).unwrap();
    assert_relative_eq!(lump_sum, 16_436.19, epsilon = 0.01);

    // $6,000 a year contributed at 7% over the same decade.
    let contributions = future_value_annuity(6_000.0, 0.07, 10.0).unwrap();
    assert!(contributions > 6_000.0 * 10.0);

    // Both buckets become positions in a portfolio alongside bonds.
    let summary = portfolio_value(&[
        Position::new(lump_sum, 5.0),
        Position::new(contributions, 7.0),
        Position::new(20_000.0, 3.0),
    ])
    .unwrap();
    assert_relative_eq!(
        summary.total_value,
        lump_sum + contributions + 20_000.0,
        epsilon = 0.01
    );
    assert!(summary.weighted_avg_return > 3.0);
    assert!(summary.weighted_avg_return < 7.0);

    // Historical yearly returns of the blended portfolio.
    let risk = risk_assessment(&[4.2, 6.1, -1.3, 8.0, 5.5, 3.9]).unwrap();
    assert!(risk.volatility > 0.0);
    assert!(risk.sharpe_ratio > 0.0);
}

/// Mortgage affordability scenario pinning the canonical 30-year figure.
#[test]
fn mortgage_scenario() {
    let payment = monthly_payment(200_000.0, 0.04, 30.0).unwrap();
    assert_relative_eq!(payment, 954.83, epsilon = 0.01);

    // Total repaid exceeds principal because interest accrues.
    let total_repaid = payment * 12.0 * 30.0;
    assert!(total_repaid > 200_000.0);

    // The same loan interest-free is a straight division.
    let interest_free = monthly_payment(200_000.0, 0.0, 30.0).unwrap();
    assert_relative_eq!(interest_free, 200_000.0 / 360.0, epsilon = 0.01);
    assert!(interest_free < payment);
}

/// Annualized return agrees with compound growth: growing at the computed
/// rate reproduces the final value.
#[test]
fn return_and_compounding_agree() {
    let annual_pct = investment_return(10_000.0, 20_000.0, 10.0).unwrap();
    let regrown = compound_interest(10_000.0, annual_pct / 100.0, 10.0, 1).unwrap();
    // The published rate is rounded to 2 dp, so the round trip is close,
    // not exact.
    assert_relative_eq!(regrown, 20_000.0, epsilon = 20.0);
}

#[test]
fn total_loss_and_flat_returns() {
    assert_eq!(investment_return(100.0, 100.0, 7.0).unwrap(), 0.0);
    assert_eq!(investment_return(100.0, 0.0, 7.0).unwrap(), -100.0);
}

#[test]
fn zero_rate_policies() {
    assert_eq!(compound_interest(5_000.0, 0.0, 3.0, 12).unwrap(), 5_000.0);
    assert_eq!(future_value_annuity(250.0, 0.0, 8.0).unwrap(), 2_000.0);
    assert_eq!(monthly_payment(9_000.0, 0.0, 3.0).unwrap(), 250.0);
}

#[test]
fn invalid_inputs_are_rejected_uniformly() {
    let cases: Vec<Result<f64, CalcError>> = vec![
        compound_interest(-1.0, 0.05, 1.0, 1),
        compound_interest(100.0, 0.05, 1.0, 0),
        monthly_payment(0.0, 0.05, 10.0),
        investment_return(0.0, 100.0, 1.0),
        future_value_annuity(100.0, 0.05, 0.0),
    ];
    for result in cases {
        assert!(matches!(result, Err(CalcError::InvalidInput(_))));
    }

    assert!(matches!(
        portfolio_value(&[]),
        Err(CalcError::InvalidInput(_))
    ));
    assert!(matches!(
        portfolio_value(&[Position::new(0.0, 5.0), Position::new(0.0, 9.0)]),
        Err(CalcError::InvalidInput(_))
    ));
    assert!(matches!(risk_assessment(&[]), Err(CalcError::InvalidInput(_))));
    assert!(matches!(
        risk_assessment(&[4.0]),
        Err(CalcError::InvalidInput(_))
    ));
}

/// Constant returns: volatility collapses to zero and the Sharpe ratio
/// takes its documented sentinel instead of dividing by zero.
#[test]
fn constant_return_series() {
    let summary = risk_assessment(&[5.0, 5.0, 5.0, 5.0]).unwrap();
    assert_eq!(summary.mean_return, 5.0);
    assert_eq!(summary.volatility, 0.0);
    assert_eq!(summary.sharpe_ratio, 0.0);
}

/// Portfolio summaries survive a JSON round trip with stable field names,
/// matching the CLI's file formats.
#[test]
fn portfolio_json_round_trip() {
    let summary = portfolio_value(&[
        Position::new(1_000.0, 10.0),
        Position::new(1_000.0, 20.0),
    ])
    .unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_value"], 2_000.0);
    assert_eq!(value["weighted_avg_return"], 15.0);
}

#[test]
fn positions_deserialize_from_cli_file_format() {
    let json = r#"{
        "positions": [
            { "amount": 10000.0, "return_rate": 8.5 },
            { "amount": 5000.0, "return_rate": -2.0 }
        ]
    }"#;

    #[derive(serde::Deserialize)]
    struct PortfolioFile {
        positions: Vec<Position>,
    }

    let file: PortfolioFile = serde_json::from_str(json).unwrap();
    let summary = portfolio_value(&file.positions).unwrap();
    assert_relative_eq!(summary.total_value, 15_000.0, epsilon = 0.01);
    assert_relative_eq!(summary.weighted_avg_return, 5.0, epsilon = 0.01);
}
