//! Coupon frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TenorError, TenorResult};

/// Payment frequency for coupon bonds.
///
/// Only frequencies that split the year into a whole number of calendar
/// months are representable, since coupon dates are stepped by months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    #[default]
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Every four months (3 per year)
    TriAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Every two months (6 per year)
    BiMonthly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Builds a frequency from the number of payments per year.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidFrequency` for zero or for counts that do
    /// not divide twelve months evenly.
    pub fn from_payments_per_year(payments: u32) -> TenorResult<Self> {
        match payments {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            3 => Ok(Frequency::TriAnnual),
            4 => Ok(Frequency::Quarterly),
            6 => Ok(Frequency::BiMonthly),
            12 => Ok(Frequency::Monthly),
            other => Err(TenorError::invalid_frequency(other)),
        }
    }

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::TriAnnual => 3,
            Frequency::Quarterly => 4,
            Frequency::BiMonthly => 6,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::TriAnnual => "Tri-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::BiMonthly => "Bi-Monthly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<u32> for Frequency {
    type Error = TenorError;

    fn try_from(payments: u32) -> Result<Self, Self::Error> {
        Self::from_payments_per_year(payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_months_per_period() {
        assert_eq!(Frequency::Annual.months_per_period(), 12);
        assert_eq!(Frequency::TriAnnual.months_per_period(), 4);
        assert_eq!(Frequency::BiMonthly.months_per_period(), 2);
    }

    #[test]
    fn test_from_payments_per_year() {
        for n in [1, 2, 3, 4, 6, 12] {
            let freq = Frequency::from_payments_per_year(n).unwrap();
            assert_eq!(freq.periods_per_year(), n);
        }
        assert!(Frequency::from_payments_per_year(0).is_err());
        assert!(Frequency::from_payments_per_year(5).is_err());
        assert!(Frequency::try_from(24).is_err());
    }
}
