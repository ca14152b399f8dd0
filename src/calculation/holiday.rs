//! Day classification and holiday premium.
//!
//! A day qualifies for the holiday premium if it is a recognized public
//! holiday, or a Saturday/Sunday when the policy counts weekends. The premium
//! stacks on top of night and overtime premiums.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::HolidayPolicy;
use crate::models::{AuditStep, HolidayCalendar, is_weekend};

use super::money::{apply_rate, pay_for_minutes};
use super::time::format_minutes;

/// The kind of calendar day, for holiday purposes.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::{DayType, get_day_type};
/// use shift_payroll::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
/// assert_eq!(get_day_type(saturday, &HolidayCalendar::default()), DayType::Weekend);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not a public holiday.
    Weekday,
    /// Saturday or Sunday, not a public holiday.
    Weekend,
    /// A recognized public holiday, on any day of the week.
    PublicHoliday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::PublicHoliday => write!(f, "Public holiday"),
        }
    }
}

/// Determines the day type of a date. Public holidays win over weekends.
pub fn get_day_type(date: NaiveDate, calendar: &HolidayCalendar) -> DayType {
    if calendar.is_public_holiday(date) {
        return DayType::PublicHoliday;
    }
    if is_weekend(date) {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}

/// Returns true if the holiday premium applies to `date` under `policy`.
pub fn is_holiday_day(date: NaiveDate, policy: &HolidayPolicy, calendar: &HolidayCalendar) -> bool {
    if !policy.enabled {
        return false;
    }
    match get_day_type(date, calendar) {
        DayType::PublicHoliday => true,
        DayType::Weekend => policy.includes_weekend,
        DayType::Weekday => false,
    }
}

/// The result of a holiday premium calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayPremiumResult {
    /// The day type of the record date.
    pub day_type: DayType,
    /// Whether the premium applied.
    pub is_holiday: bool,
    /// The premium amount, at full precision.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices the holiday premium for `worked_minutes` on `date`.
pub fn calculate_holiday_premium(
    date: NaiveDate,
    worked_minutes: i64,
    hourly: Decimal,
    policy: &HolidayPolicy,
    calendar: &HolidayCalendar,
    step_number: u32,
) -> HolidayPremiumResult {
    let day_type = get_day_type(date, calendar);
    let is_holiday = is_holiday_day(date, policy, calendar);

    let amount = if is_holiday {
        apply_rate(pay_for_minutes(hourly, worked_minutes), policy.rate)
    } else {
        Decimal::ZERO
    };

    let reasoning = match (policy.enabled, is_holiday, day_type) {
        (false, _, _) => "Holiday premium disabled by policy".to_string(),
        (true, true, DayType::PublicHoliday) => format!(
            "{} is {}: {} worked at +{}",
            date,
            calendar
                .holiday_on(date)
                .map(|h| h.name.as_str())
                .unwrap_or("a public holiday"),
            format_minutes(worked_minutes),
            policy.rate.normalize()
        ),
        (true, true, _) => format!(
            "{} is a {:?} and weekends count as holidays: {} worked at +{}",
            date,
            date.weekday(),
            format_minutes(worked_minutes),
            policy.rate.normalize()
        ),
        (true, false, DayType::Weekend) => {
            format!("{} is a weekend day but weekends are not holidays", date)
        }
        (true, false, _) => format!("{} is a regular weekday", date),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "holiday_premium".to_string(),
        rule_name: "Holiday Premium".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "day_type": day_type,
            "enabled": policy.enabled,
            "includes_weekend": policy.includes_weekend,
            "rate": policy.rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "is_holiday": is_holiday,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    HolidayPremiumResult {
        day_type,
        is_holiday,
        amount,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicHoliday;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> HolidayCalendar {
        HolidayCalendar::new(vec![
            PublicHoliday {
                date: date(2026, 3, 20), // Friday
                name: "Vernal Equinox Day".to_string(),
            },
            PublicHoliday {
                date: date(2026, 5, 3), // Sunday
                name: "Constitution Memorial Day".to_string(),
            },
        ])
    }

    #[test]
    fn test_day_types() {
        let calendar = calendar();
        assert_eq!(get_day_type(date(2026, 3, 19), &calendar), DayType::Weekday);
        assert_eq!(get_day_type(date(2026, 3, 21), &calendar), DayType::Weekend);
        assert_eq!(get_day_type(date(2026, 3, 20), &calendar), DayType::PublicHoliday);
        assert_eq!(get_day_type(date(2026, 5, 3), &calendar), DayType::PublicHoliday);
    }

    #[test]
    fn test_day_type_follows_weekend_rule_outside_calendar() {
        let calendar = HolidayCalendar::default();
        for day in 1..=31 {
            let d = date(2026, 3, day);
            let expected = if is_weekend(d) {
                DayType::Weekend
            } else {
                DayType::Weekday
            };
            assert_eq!(get_day_type(d, &calendar), expected, "{}", d);
        }
    }

    #[test]
    fn test_weekend_counts_when_included() {
        let policy = HolidayPolicy::default();
        assert!(is_holiday_day(date(2026, 3, 21), &policy, &calendar()));
    }

    #[test]
    fn test_weekend_ignored_when_excluded() {
        let policy = HolidayPolicy {
            includes_weekend: false,
            ..HolidayPolicy::default()
        };
        assert!(!is_holiday_day(date(2026, 3, 21), &policy, &calendar()));
        assert!(is_holiday_day(date(2026, 3, 20), &policy, &calendar()));
    }

    #[test]
    fn test_disabled_policy_never_qualifies() {
        let policy = HolidayPolicy {
            enabled: false,
            ..HolidayPolicy::default()
        };
        assert!(!is_holiday_day(date(2026, 3, 20), &policy, &calendar()));
        assert!(!is_holiday_day(date(2026, 3, 21), &policy, &calendar()));
    }

    #[test]
    fn test_public_holiday_premium() {
        let result = calculate_holiday_premium(
            date(2026, 3, 20),
            480,
            dec("1000"),
            &HolidayPolicy::default(),
            &calendar(),
            1,
        );
        assert!(result.is_holiday);
        assert_eq!(result.day_type, DayType::PublicHoliday);
        // 8h * 1000 * 0.35
        assert_eq!(result.amount, dec("2800"));
        assert!(result.audit_step.reasoning.contains("Vernal Equinox Day"));
    }

    #[test]
    fn test_weekday_has_no_premium() {
        let result = calculate_holiday_premium(
            date(2026, 3, 19),
            480,
            dec("1000"),
            &HolidayPolicy::default(),
            &calendar(),
            1,
        );
        assert!(!result.is_holiday);
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.audit_step.output["is_holiday"], false);
    }

    #[test]
    fn test_premium_scales_with_worked_minutes() {
        let result = calculate_holiday_premium(
            date(2026, 3, 21),
            0,
            dec("1000"),
            &HolidayPolicy::default(),
            &calendar(),
            1,
        );
        assert!(result.is_holiday);
        assert_eq!(result.amount, Decimal::ZERO);
    }
}
