//! Property-based round trips for the Z-spread and yield solvers.

use proptest::prelude::*;

use tenor_analytics::prelude::*;
use tenor_bonds::ScheduleGenerator;
use tenor_core::{Date, Frequency};
use tenor_curves::{Curve, CurveRow};

fn frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(vec![
        Frequency::Annual,
        Frequency::SemiAnnual,
        Frequency::Quarterly,
        Frequency::Monthly,
    ])
}

proptest! {
    #[test]
    fn ytm_round_trip(
        freq in frequency(),
        coupon in 0.0f64..8.0,
        years in 1i32..20,
        eval_offset in 0i64..365,
        ytm in -0.02f64..0.15,
    ) {
        let first = Date::from_ymd(2020, 1, 15).unwrap();
        let evaluation = first.add_days(eval_offset);
        let schedule = ScheduleGenerator::generate_with(
            evaluation,
            first,
            freq,
            Some(first.add_months(12 * years).unwrap()),
            coupon / f64::from(freq.periods_per_year()),
            100.0,
        )
        .unwrap();

        let periods = freq.periods_per_year();
        let dirty = price_from_yield(schedule.flows(), ytm, periods);
        let solution = solve_yield(schedule.flows(), periods, dirty, &YieldSettings::default()).unwrap();

        prop_assert!(solution.converged);
        prop_assert!((solution.as_decimal() - ytm).abs() < 1e-7, "solved {} for {}", solution.as_decimal(), ytm);
    }

    #[test]
    fn z_spread_round_trip(
        freq in frequency(),
        coupon in 0.0f64..8.0,
        years in 1i32..15,
        spread in -0.03f64..0.15,
        zero_pct in 0.0f64..5.0,
    ) {
        let evaluation = Date::from_ymd(2024, 2, 10).unwrap();
        let curve = Curve::load(vec![
            CurveRow::new(Date::from_ymd(2024, 1, 1).unwrap(), 1.0, zero_pct, zero_pct),
            CurveRow::new(Date::from_ymd(2045, 1, 1).unwrap(), 1.0, zero_pct, zero_pct),
        ])
        .unwrap();
        let first = Date::from_ymd(2023, 11, 30).unwrap();
        let schedule = ScheduleGenerator::generate_with(
            evaluation,
            first,
            freq,
            Some(first.add_months(12 * years).unwrap()),
            coupon / f64::from(freq.periods_per_year()),
            100.0,
        )
        .unwrap();

        let calculator = ZSpreadCalculator::new(&curve);
        let target = calculator.price_with_spread(&schedule, spread * 10_000.0).unwrap();
        let solution = calculator.calculate(&schedule, target).unwrap();

        prop_assert!(solution.residual.abs() < 1e-4);
        prop_assert!((solution.spread_bps - spread * 10_000.0).abs() < 0.05);
    }
}
