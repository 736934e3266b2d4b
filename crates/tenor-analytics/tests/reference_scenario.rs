//! End-to-end checks on the 5% annual bond evaluated 2022-06-15.

use approx::assert_relative_eq;
use rust_decimal_macros::dec;

use tenor_analytics::prelude::*;
use tenor_bonds::{Bond, BondBuilder, ScheduleGenerator};
use tenor_core::Date;
use tenor_curves::{Curve, CurveRow};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn evaluation() -> Date {
    date(2022, 6, 15)
}

/// Flat 3% curve with `df = exp(-0.03 t)` at every coupon date.
fn flat_curve() -> Curve {
    let rows = [
        date(2022, 1, 1),
        date(2023, 1, 1),
        date(2024, 1, 1),
        date(2025, 1, 1),
        date(2026, 1, 1),
    ]
    .into_iter()
    .map(|d| {
        let t = evaluation().year_fraction(&d);
        CurveRow::new(d, (-0.03 * t).exp(), 3.0, 3.0)
    });
    Curve::load(rows).unwrap()
}

fn reference_bond() -> Bond {
    BondBuilder::new()
        .identifier("REF5")
        .nominal(dec!(100))
        .coupon_rate(dec!(5))
        .coupon_frequency(1)
        .first_coupon_date(date(2020, 1, 1))
        .maturity(date(2025, 1, 1))
        .build()
        .unwrap()
}

#[test]
fn dirty_price_matches_discounted_cash_flows() {
    let curve = flat_curve();
    let priced = price(evaluation(), &reference_bond(), &curve, 0.0).unwrap();

    let t1: f64 = 200.0 / 365.0;
    let t2: f64 = 565.0 / 365.0;
    let t3: f64 = 931.0 / 365.0;
    let expected = 5.0 * (-0.03 * t1).exp() + 5.0 * (-0.03 * t2).exp() + 105.0 * (-0.03 * t3).exp();

    assert_relative_eq!(priced.dirty_price, expected, epsilon = 1e-6);
    assert_relative_eq!(priced.accrued_interest, 5.0 * 165.0 / 365.0, epsilon = 1e-12);
    assert_relative_eq!(
        priced.clean_price,
        expected - 5.0 * 165.0 / 365.0,
        epsilon = 1e-6
    );
}

#[test]
fn schedule_has_three_remaining_flows() {
    let schedule = ScheduleGenerator::generate(&reference_bond(), evaluation()).unwrap();
    let amounts: Vec<f64> = schedule.iter().map(|cf| cf.amount).collect();
    assert_eq!(amounts, vec![5.0, 5.0, 105.0]);
}

#[test]
fn z_spread_recovers_pricing_spread() {
    let curve = flat_curve();
    let bond = reference_bond();

    for spread_bps in [-150.0, 0.0, 75.0, 420.0] {
        let target = price(evaluation(), &bond, &curve, spread_bps).unwrap().dirty_price;
        let solution =
            solve_z_spread(evaluation(), &bond, &curve, target, &ZSpreadSettings::default())
                .unwrap();

        assert!(solution.converged);
        assert_relative_eq!(solution.spread_bps, spread_bps, epsilon = 0.01);
    }
}

#[test]
fn z_spread_unreachable_target_fails() {
    let curve = flat_curve();
    let bond = reference_bond();
    let settings = ZSpreadSettings::default();

    let too_rich = solve_z_spread(evaluation(), &bond, &curve, 150.0, &settings);
    assert!(matches!(too_rich, Err(AnalyticsError::Solver { .. })));

    let too_cheap = solve_z_spread(evaluation(), &bond, &curve, 10.0, &settings);
    assert!(matches!(too_cheap, Err(AnalyticsError::Solver { .. })));
}

#[test]
fn ytm_recovers_flat_yield() {
    let bond = reference_bond();
    let schedule = ScheduleGenerator::generate(&bond, evaluation()).unwrap();

    for y in [0.01, 0.05, 0.125] {
        let dirty = price_from_yield(schedule.flows(), y, 1);
        let solution = solve_ytm(evaluation(), &bond, dirty, &YieldSettings::default()).unwrap();
        assert_relative_eq!(solution.yield_pct, y * 100.0, epsilon = 1e-6);
    }
}

#[test]
fn matured_bond_is_schedule_error() {
    let curve = flat_curve();
    let result = price(date(2025, 6, 1), &reference_bond(), &curve, 0.0);
    assert!(matches!(result, Err(AnalyticsError::Schedule { .. })));
}

#[test]
fn batch_report_matches_single_bond_results() {
    let curve = flat_curve();
    let config = ValuationConfig::default();
    let bond = reference_bond();

    let report = value_portfolio(evaluation(), std::slice::from_ref(&bond), &curve, &config);
    assert!(!report.has_failures());

    let v = report.find("REF5").unwrap();
    let priced = price(evaluation(), &bond, &curve, 0.0).unwrap();
    assert_relative_eq!(v.dirty_price, priced.dirty_price, epsilon = 1e-12);

    let ytm = solve_ytm(evaluation(), &bond, priced.dirty_price, &config.yields).unwrap();
    assert_relative_eq!(v.ytm_pct().unwrap(), ytm.yield_pct, epsilon = 1e-12);

    let schedule = ScheduleGenerator::generate(&bond, evaluation()).unwrap();
    let durations = duration(schedule.flows(), ytm.as_decimal(), 1).unwrap();
    assert_relative_eq!(v.macaulay_duration.unwrap(), durations.macaulay, epsilon = 1e-12);
}
