//! Pay period and public holiday models.
//!
//! This module contains the [`PayPeriod`] used to scope monthly reports and
//! the [`HolidayCalendar`] consulted for holiday premiums.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A recognized public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
}

/// The set of public holidays an organization recognizes.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{HolidayCalendar, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
///     name: "Vernal Equinox Day".to_string(),
/// }]);
///
/// assert!(calendar.is_public_holiday(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()));
/// assert!(!calendar.is_public_holiday(NaiveDate::from_ymd_opt(2026, 3, 19).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// Holidays, in no particular order.
    #[serde(default)]
    pub public_holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    pub fn new(public_holidays: Vec<PublicHoliday>) -> Self {
        Self { public_holidays }
    }

    /// Checks if a given date is a recognized public holiday.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.public_holidays.iter().any(|h| h.date == date)
    }

    /// Returns the holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.public_holidays.iter().find(|h| h.date == date)
    }
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// An inclusive date range that a report covers.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::month(2026, 2).unwrap();
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Builds the period covering one calendar month.
    pub fn month(year: i32, month: u32) -> PayrollResult<Self> {
        let invalid = || PayrollError::InvalidPeriod { year, month };

        let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;
        let end_date = next_month.pred_opt().ok_or_else(invalid)?;

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this period, inclusive at both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_calendar() -> HolidayCalendar {
        HolidayCalendar::new(vec![
            PublicHoliday {
                date: date(2026, 1, 1),
                name: "New Year's Day".to_string(),
            },
            PublicHoliday {
                date: date(2026, 1, 12),
                name: "Coming of Age Day".to_string(),
            },
        ])
    }

    #[test]
    fn test_is_public_holiday() {
        let calendar = create_calendar();
        assert!(calendar.is_public_holiday(date(2026, 1, 1)));
        assert!(calendar.is_public_holiday(date(2026, 1, 12)));
        assert!(!calendar.is_public_holiday(date(2026, 1, 13)));
    }

    #[test]
    fn test_holiday_on_returns_name() {
        let calendar = create_calendar();
        assert_eq!(
            calendar.holiday_on(date(2026, 1, 12)).map(|h| h.name.as_str()),
            Some("Coming of Age Day")
        );
        assert!(calendar.holiday_on(date(2026, 1, 2)).is_none());
    }

    #[test]
    fn test_empty_calendar_has_no_holidays() {
        let calendar = HolidayCalendar::default();
        assert!(!calendar.is_public_holiday(date(2026, 1, 1)));
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2026, 3, 7))); // Saturday
        assert!(is_weekend(date(2026, 3, 8))); // Sunday
        assert!(!is_weekend(date(2026, 3, 9))); // Monday
        assert!(!is_weekend(date(2026, 3, 6))); // Friday
    }

    #[test]
    fn test_month_period_bounds() {
        let period = PayPeriod::month(2026, 3).unwrap();
        assert_eq!(period.start_date, date(2026, 3, 1));
        assert_eq!(period.end_date, date(2026, 3, 31));
    }

    #[test]
    fn test_december_period_rolls_year() {
        let period = PayPeriod::month(2026, 12).unwrap();
        assert_eq!(period.end_date, date(2026, 12, 31));
    }

    #[test]
    fn test_leap_february() {
        let period = PayPeriod::month(2028, 2).unwrap();
        assert_eq!(period.end_date, date(2028, 2, 29));
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(matches!(
            PayPeriod::month(2026, 13),
            Err(PayrollError::InvalidPeriod { year: 2026, month: 13 })
        ));
        assert!(PayPeriod::month(2026, 0).is_err());
    }

    #[test]
    fn test_calendar_deserialization() {
        let json = r#"{
            "public_holidays": [
                { "date": "2026-05-05", "name": "Children's Day" }
            ]
        }"#;
        let calendar: HolidayCalendar = serde_json::from_str(json).unwrap();
        assert!(calendar.is_public_holiday(date(2026, 5, 5)));
    }
}
