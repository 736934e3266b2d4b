//! Coupon grid walking.

use tenor_core::{Date, Frequency};

use crate::bond::{decimal_to_f64, Bond};
use crate::cashflows::schedule::{CashFlow, CashFlowSchedule};
use crate::error::{BondError, BondResult};

/// Generates remaining cash flows for bonds.
///
/// Coupon date `k` is `first_coupon + k * (12 / frequency)` months, clamped to
/// month end, so a grid anchored on the 31st keeps returning to the 31st.
/// The running period is the one whose end is the first grid date strictly
/// after the evaluation date; an evaluation on a coupon date therefore has
/// nothing accrued.
///
/// The redemption date appears exactly once, as the last flow. When it falls
/// between grid dates (a call date, say) it follows the last grid date
/// before it.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Generates the schedule of `bond` at `evaluation`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Schedule` when the bond has no first coupon date,
    /// no redemption date, an unusable frequency, or a redemption date on or
    /// before `evaluation`.
    pub fn generate(bond: &Bond, evaluation: Date) -> BondResult<CashFlowSchedule> {
        let first_coupon = bond
            .first_coupon_date()
            .ok_or_else(|| BondError::schedule("no first coupon date"))?;
        let frequency = bond.frequency()?;
        let period_coupon = decimal_to_f64(bond.coupon_per_period()?, "coupon")?;
        let principal = bond.nominal_f64()?;

        Self::generate_with(
            evaluation,
            first_coupon,
            frequency,
            bond.redemption_date(),
            period_coupon,
            principal,
        )
    }

    /// Generates a schedule from raw terms.
    ///
    /// # Errors
    ///
    /// Same as [`ScheduleGenerator::generate`].
    pub fn generate_with(
        evaluation: Date,
        first_coupon: Date,
        frequency: Frequency,
        redemption: Option<Date>,
        period_coupon: f64,
        principal: f64,
    ) -> BondResult<CashFlowSchedule> {
        let redemption = redemption.ok_or_else(|| {
            BondError::schedule("no redemption date: neither maturity nor next call date is set")
        })?;
        if redemption <= evaluation {
            return Err(BondError::schedule(format!(
                "redemption date {redemption} is not after evaluation date {evaluation}"
            )));
        }

        let months = frequency.months_per_period() as i32;
        let next_index = Self::next_coupon_index(evaluation, first_coupon, months)?;
        let previous_coupon = grid_date(first_coupon, months, next_index - 1)?;
        let next_coupon = grid_date(first_coupon, months, next_index)?;
        let accrued_fraction = Self::accrued_fraction(evaluation, previous_coupon, next_coupon);

        let mut flows = Vec::new();
        let mut index = next_index;
        loop {
            let date = grid_date(first_coupon, months, index)?;
            if date >= redemption {
                break;
            }
            flows.push(CashFlow::coupon(
                date,
                evaluation.year_fraction(&date),
                period_coupon,
            ));
            index += 1;
        }
        flows.push(CashFlow::final_payment(
            redemption,
            evaluation.year_fraction(&redemption),
            period_coupon,
            principal,
        ));

        log::debug!(
            "schedule at {evaluation}: {} flows to {redemption}, accrued fraction {accrued_fraction:.6}",
            flows.len()
        );

        Ok(CashFlowSchedule {
            evaluation_date: evaluation,
            previous_coupon,
            next_coupon,
            accrued_fraction,
            period_coupon,
            flows,
        })
    }

    /// Elapsed share of the period `[previous, next]` at `evaluation`.
    ///
    /// Zero when the period has no length, and never negative (an
    /// evaluation before the first accrual start has accrued nothing).
    #[must_use]
    pub fn accrued_fraction(evaluation: Date, previous: Date, next: Date) -> f64 {
        let period = previous.days_between(&next);
        if period <= 0 {
            return 0.0;
        }
        let elapsed = previous.days_between(&evaluation);
        (elapsed as f64 / period as f64).max(0.0)
    }

    /// Index of the first grid date strictly after `evaluation`.
    fn next_coupon_index(evaluation: Date, first_coupon: Date, months: i32) -> BondResult<i32> {
        let elapsed_months = (evaluation.year() - first_coupon.year()) * 12
            + evaluation.month() as i32
            - first_coupon.month() as i32;

        // Start one period short of the calendar-month estimate, which is
        // always strictly before the evaluation date
        let mut index = (elapsed_months / months - 1).max(0);
        while grid_date(first_coupon, months, index)? <= evaluation {
            index += 1;
        }
        Ok(index)
    }
}

fn grid_date(first_coupon: Date, months: i32, index: i32) -> BondResult<Date> {
    Ok(first_coupon.add_months(months * index)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn annual(evaluation: Date, redemption: Option<Date>) -> BondResult<CashFlowSchedule> {
        ScheduleGenerator::generate_with(
            evaluation,
            date(2020, 1, 1),
            Frequency::Annual,
            redemption,
            5.0,
            100.0,
        )
    }

    #[test]
    fn test_reference_scenario() {
        let schedule = annual(date(2022, 6, 15), Some(date(2025, 1, 1))).unwrap();

        let dates: Vec<Date> = schedule.iter().map(|cf| cf.date).collect();
        assert_eq!(dates, vec![date(2023, 1, 1), date(2024, 1, 1), date(2025, 1, 1)]);

        let amounts: Vec<f64> = schedule.iter().map(|cf| cf.amount).collect();
        assert_eq!(amounts, vec![5.0, 5.0, 105.0]);

        assert_eq!(schedule.previous_coupon(), date(2022, 1, 1));
        assert_eq!(schedule.next_coupon(), date(2023, 1, 1));
        assert_relative_eq!(schedule.accrued_fraction(), 165.0 / 365.0, epsilon = 1e-15);
        assert_relative_eq!(schedule.accrued_interest(), 5.0 * 165.0 / 365.0, epsilon = 1e-12);
        assert_relative_eq!(schedule.flows()[0].years, 200.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_on_coupon_date_nothing_accrued() {
        let schedule = annual(date(2023, 1, 1), Some(date(2025, 1, 1))).unwrap();

        assert_eq!(schedule.accrued_fraction(), 0.0);
        assert_eq!(schedule.flows()[0].date, date(2024, 1, 1));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_day_before_coupon_nearly_fully_accrued() {
        let schedule = annual(date(2022, 12, 31), Some(date(2025, 1, 1))).unwrap();

        assert_relative_eq!(schedule.accrued_fraction(), 364.0 / 365.0, epsilon = 1e-15);
        assert_eq!(schedule.flows()[0].date, date(2023, 1, 1));
    }

    #[test]
    fn test_missing_redemption_date() {
        let result = annual(date(2022, 6, 15), None);
        assert!(matches!(result, Err(BondError::Schedule { .. })));
    }

    #[test]
    fn test_matured_bond() {
        assert!(annual(date(2025, 1, 1), Some(date(2025, 1, 1))).is_err());
        assert!(annual(date(2026, 1, 1), Some(date(2025, 1, 1))).is_err());
    }

    #[test]
    fn test_off_grid_redemption_appended_once() {
        let schedule = annual(date(2022, 6, 15), Some(date(2023, 7, 1))).unwrap();

        let dates: Vec<Date> = schedule.iter().map(|cf| cf.date).collect();
        assert_eq!(dates, vec![date(2023, 1, 1), date(2023, 7, 1)]);
        assert!(schedule.final_flow().unwrap().is_principal());
        assert_eq!(schedule.final_flow().unwrap().amount, 105.0);
    }

    #[test]
    fn test_redemption_before_next_coupon() {
        let schedule = annual(date(2022, 6, 15), Some(date(2022, 9, 1))).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.flows()[0].date, date(2022, 9, 1));
        assert_eq!(schedule.flows()[0].amount, 105.0);
    }

    #[test]
    fn test_month_end_grid_does_not_drift() {
        let schedule = ScheduleGenerator::generate_with(
            date(2020, 2, 10),
            date(2020, 1, 31),
            Frequency::Monthly,
            Some(date(2020, 6, 30)),
            0.5,
            100.0,
        )
        .unwrap();

        let dates: Vec<Date> = schedule.iter().map(|cf| cf.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2020, 2, 29),
                date(2020, 3, 31),
                date(2020, 4, 30),
                date(2020, 5, 31),
                date(2020, 6, 30),
            ]
        );
        assert_eq!(schedule.previous_coupon(), date(2020, 1, 31));
    }

    #[test]
    fn test_evaluation_before_first_coupon() {
        let schedule = ScheduleGenerator::generate_with(
            date(2022, 6, 15),
            date(2023, 1, 1),
            Frequency::Annual,
            Some(date(2024, 1, 1)),
            5.0,
            100.0,
        )
        .unwrap();

        assert_eq!(schedule.next_coupon(), date(2023, 1, 1));
        assert_eq!(schedule.previous_coupon(), date(2022, 1, 1));
        assert_relative_eq!(schedule.accrued_fraction(), 165.0 / 365.0, epsilon = 1e-15);
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_accrued_fraction_clamps() {
        let d = date(2022, 1, 1);
        assert_eq!(ScheduleGenerator::accrued_fraction(d, d, d), 0.0);
        assert_eq!(
            ScheduleGenerator::accrued_fraction(date(2021, 1, 1), d, date(2023, 1, 1)),
            0.0
        );
    }

    #[test]
    fn test_quarterly_accrual() {
        let schedule = ScheduleGenerator::generate_with(
            date(2024, 2, 15),
            date(2023, 3, 1),
            Frequency::Quarterly,
            Some(date(2025, 3, 1)),
            1.25,
            100.0,
        )
        .unwrap();

        // Period 2023-12-01 .. 2024-03-01 is 91 days, 76 elapsed
        assert_eq!(schedule.previous_coupon(), date(2023, 12, 1));
        assert_eq!(schedule.next_coupon(), date(2024, 3, 1));
        assert_relative_eq!(schedule.accrued_fraction(), 76.0 / 91.0, epsilon = 1e-15);
        assert_eq!(schedule.len(), 5);
    }
}
