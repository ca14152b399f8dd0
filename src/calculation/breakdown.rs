//! Per-record pay breakdown.
//!
//! This module turns one [`AttendanceRecord`] and one [`PayPolicy`] snapshot
//! into a [`PayBreakdown`]. The computation is pure: identical inputs always
//! give identical outputs.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::{
    AttendanceRecord, AuditStep, BreakdownResult, HolidayCalendar, PayBreakdown, RecordTimes,
};

use super::holiday::calculate_holiday_premium;
use super::money::{pay_for_minutes, round_currency, sum_amounts};
use super::night_premium::calculate_night_premium;
use super::overtime::detect_overtime;
use super::time::{format_minutes, shift_span};

/// Gross, break and worked minutes of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WorkedTime {
    gross_minutes: i64,
    break_minutes: i64,
    worked_minutes: i64,
    is_complete: bool,
}

fn measure_worked_time(times: &RecordTimes) -> PayrollResult<WorkedTime> {
    let (gross_minutes, break_minutes, is_complete) = match times {
        RecordTimes::Shift { start, end } => {
            let (start, end) = shift_span(start, end)?;
            (end - start, 0, true)
        }
        RecordTimes::Timecard {
            clock_in,
            clock_out: Some(clock_out),
            breaks,
        } => {
            let gross = (*clock_out - *clock_in).num_minutes().max(0);
            let breaks: i64 = breaks.iter().map(|b| b.duration_minutes()).sum();
            (gross, breaks, true)
        }
        RecordTimes::Timecard { clock_out: None, .. } => (0, 0, false),
    };

    Ok(WorkedTime {
        gross_minutes,
        break_minutes,
        worked_minutes: (gross_minutes - break_minutes).max(0),
        is_complete,
    })
}

/// Computes the pay breakdown for one record.
///
/// See [`compute_breakdown_traced`] for the steps; this variant drops the
/// audit trail.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::compute_breakdown;
/// use shift_payroll::config::PayPolicy;
/// use shift_payroll::models::{AttendanceRecord, HolidayCalendar, RecordStatus, RecordTimes};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     id: "rec_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), // Monday
///     status: RecordStatus::Approved,
///     hourly_wage: None,
///     times: RecordTimes::Shift { start: "09:00".to_string(), end: "17:00".to_string() },
/// };
///
/// let breakdown = compute_breakdown(&record, &PayPolicy::default(), &HolidayCalendar::default()).unwrap();
/// assert_eq!(breakdown.worked_minutes, 480);
/// assert_eq!(breakdown.total_amount, Decimal::new(8800, 0));
/// ```
pub fn compute_breakdown(
    record: &AttendanceRecord,
    policy: &PayPolicy,
    calendar: &HolidayCalendar,
) -> PayrollResult<PayBreakdown> {
    compute_breakdown_traced(record, policy, calendar).map(|result| result.breakdown)
}

/// Computes the pay breakdown for one record, keeping the audit trail.
///
/// 1. The hourly wage is the record override or the policy default.
/// 2. Worked minutes are the gross span minus closed breaks, floored at zero.
///    A shift ending earlier than it starts runs past midnight. A timecard
///    without a clock-out counts as zero.
/// 3. Base pay is the wage times worked hours.
/// 4. Night, overtime and holiday premiums are each priced independently and
///    stack on top of base pay.
/// 5. The total is the four components rounded once; transport is not part of
///    a record and is added by the aggregator.
///
/// Only a malformed clock string fails, with `InvalidFormat`.
pub fn compute_breakdown_traced(
    record: &AttendanceRecord,
    policy: &PayPolicy,
    calendar: &HolidayCalendar,
) -> PayrollResult<BreakdownResult> {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    // Step 1: wage
    let hourly = record.hourly_wage.unwrap_or(policy.default_hourly_wage);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "wage_resolution".to_string(),
        rule_name: "Hourly Wage Resolution".to_string(),
        input: serde_json::json!({
            "record_override": record.hourly_wage.map(|w| w.normalize().to_string()),
            "policy_default": policy.default_hourly_wage.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_wage": hourly.normalize().to_string()
        }),
        reasoning: match record.hourly_wage {
            Some(w) => format!("Record overrides wage with {}/h", w.normalize()),
            None => format!(
                "No override on record, using policy default {}/h",
                policy.default_hourly_wage.normalize()
            ),
        },
    });
    step_number += 1;

    // Step 2: worked time and base pay
    let worked = measure_worked_time(&record.times)?;
    let base_amount = pay_for_minutes(hourly, worked.worked_minutes);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "worked_minutes".to_string(),
        rule_name: "Worked Time".to_string(),
        input: serde_json::json!({
            "gross_minutes": worked.gross_minutes,
            "break_minutes": worked.break_minutes,
            "is_complete": worked.is_complete
        }),
        output: serde_json::json!({
            "worked_minutes": worked.worked_minutes,
            "base_amount": base_amount.normalize().to_string()
        }),
        reasoning: if worked.is_complete {
            format!(
                "{} gross minus {} breaks = {} worked at {}/h",
                format_minutes(worked.gross_minutes),
                format_minutes(worked.break_minutes),
                format_minutes(worked.worked_minutes),
                hourly.normalize()
            )
        } else {
            "Timecard has no clock-out yet, counting zero worked time".to_string()
        },
    });
    step_number += 1;

    // Step 3: night premium
    let night = calculate_night_premium(&record.times, hourly, &policy.night, step_number)?;
    audit_steps.push(night.audit_step);
    step_number += 1;

    // Step 4: overtime premium, per record
    let overtime = detect_overtime(worked.worked_minutes, hourly, &policy.overtime, step_number);
    audit_steps.push(overtime.audit_step);
    step_number += 1;

    // Step 5: holiday premium
    let holiday = calculate_holiday_premium(
        record.date,
        worked.worked_minutes,
        hourly,
        &policy.holiday,
        calendar,
        step_number,
    );
    audit_steps.push(holiday.audit_step);
    step_number += 1;

    // Step 6: record total
    let unrounded = sum_amounts([base_amount, night.amount, overtime.amount, holiday.amount]);
    let total_amount = round_currency(unrounded);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "record_total".to_string(),
        rule_name: "Record Total".to_string(),
        input: serde_json::json!({
            "base_amount": base_amount.normalize().to_string(),
            "night_amount": night.amount.normalize().to_string(),
            "overtime_amount": overtime.amount.normalize().to_string(),
            "holiday_amount": holiday.amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_amount": total_amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} rounded to {} (transport is added per day)",
            unrounded.normalize(),
            total_amount.normalize()
        ),
    });

    let breakdown = PayBreakdown {
        record_id: record.id.clone(),
        employee_id: record.employee_id.clone(),
        date: record.date,
        hourly_wage: hourly,
        is_complete: worked.is_complete,
        is_holiday: holiday.is_holiday,
        worked_minutes: worked.worked_minutes,
        break_minutes: worked.break_minutes,
        night_minutes: night.night_minutes,
        overtime_minutes: overtime.overtime_minutes,
        base_amount,
        night_amount: night.amount,
        overtime_amount: overtime.amount,
        holiday_amount: holiday.amount,
        total_amount,
    };

    Ok(BreakdownResult {
        breakdown,
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use crate::models::{Break, PublicHoliday, RecordStatus};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn shift_record(date: &str, start: &str, end: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: "rec_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            status: RecordStatus::Approved,
            hourly_wage: None,
            times: RecordTimes::Shift {
                start: start.to_string(),
                end: end.to_string(),
            },
        }
    }

    fn timecard_record(
        date: &str,
        clock_in: &str,
        clock_out: Option<&str>,
        breaks: Vec<Break>,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: "tc_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            status: RecordStatus::Pending,
            hourly_wage: None,
            times: RecordTimes::Timecard {
                clock_in: make_datetime(date, clock_in),
                clock_out: clock_out.map(|t| make_datetime(date, t)),
                breaks,
            },
        }
    }

    fn scenario_policy() -> PayPolicy {
        let mut policy = PayPolicy {
            default_hourly_wage: dec("1200"),
            ..PayPolicy::default()
        };
        policy.transport.enabled = true;
        policy.transport.per_day_amount = dec("300");
        policy
    }

    fn no_premium_policy() -> PayPolicy {
        let mut policy = PayPolicy::default();
        policy.night.enabled = false;
        policy.overtime.enabled = false;
        policy.holiday.enabled = false;
        policy
    }

    #[test]
    fn test_saturday_evening_scenario() {
        // 2026-03-07 is a Saturday
        let record = shift_record("2026-03-07", "18:00", "23:00");
        let b = compute_breakdown(&record, &scenario_policy(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.worked_minutes, 300);
        assert_eq!(b.night_minutes, 60);
        assert_eq!(b.overtime_minutes, 0);
        assert_eq!(b.base_amount, dec("6000"));
        assert_eq!(b.night_amount, dec("300"));
        assert_eq!(b.overtime_amount, Decimal::ZERO);
        assert_eq!(b.holiday_amount, dec("2100"));
        assert!(b.is_holiday);
        assert_eq!(b.total_amount, dec("8400"));
    }

    #[test]
    fn test_weekday_day_shift_base_only() {
        let record = shift_record("2026-03-02", "09:00", "17:00");
        let b = compute_breakdown(&record, &PayPolicy::default(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.hourly_wage, dec("1100"));
        assert_eq!(b.worked_minutes, 480);
        assert_eq!(b.base_amount, dec("8800"));
        assert_eq!(b.premium_amount(), Decimal::ZERO);
        assert_eq!(b.total_amount, dec("8800"));
    }

    #[test]
    fn test_record_wage_override() {
        let mut record = shift_record("2026-03-02", "09:00", "12:00");
        record.hourly_wage = Some(dec("1500"));
        let b = compute_breakdown(&record, &PayPolicy::default(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.hourly_wage, dec("1500"));
        assert_eq!(b.base_amount, dec("4500"));
    }

    #[test]
    fn test_huge_wage_saturates_instead_of_panicking() {
        let mut weekday = shift_record("2026-03-02", "09:00", "17:00");
        weekday.hourly_wage = Some(Decimal::MAX);
        let b = compute_breakdown(&weekday, &PayPolicy::default(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.base_amount, Decimal::MAX);
        assert_eq!(b.night_amount, Decimal::ZERO);
        assert_eq!(b.overtime_amount, Decimal::ZERO);
        assert_eq!(b.holiday_amount, Decimal::ZERO);
        assert_eq!(b.total_amount, Decimal::MAX);

        // Saturday overnight with overtime: every premium is priced
        let mut saturday = shift_record("2026-03-07", "14:00", "02:00");
        saturday.hourly_wage = Some(Decimal::MAX);
        let b = compute_breakdown(&saturday, &scenario_policy(), &HolidayCalendar::default()).unwrap();

        assert!(b.night_amount > Decimal::ZERO);
        assert!(b.overtime_amount > Decimal::ZERO);
        assert!(b.holiday_amount > Decimal::ZERO);
        assert_eq!(b.unrounded_total(), Decimal::MAX);
        assert_eq!(b.total_amount, Decimal::MAX);
    }

    #[test]
    fn test_timecard_spanning_years_counts_every_night() {
        let record = AttendanceRecord {
            times: RecordTimes::Timecard {
                clock_in: make_datetime("2026-03-02", "09:00:00"),
                clock_out: Some(make_datetime("2036-03-02", "09:00:00")),
                breaks: vec![],
            },
            ..timecard_record("2026-03-02", "09:00:00", None, vec![])
        };
        let b = compute_breakdown(&record, &PayPolicy::default(), &HolidayCalendar::default()).unwrap();

        // 3653 days, seven night hours each
        assert_eq!(b.worked_minutes, 3653 * 1440);
        assert_eq!(b.night_minutes, 3653 * 420);
        assert_eq!(b.overtime_minutes, 3653 * 1440 - 480);
    }

    #[test]
    fn test_overnight_shift_crosses_midnight() {
        // Monday 23:00 to Tuesday 06:00
        let record = shift_record("2026-03-02", "23:00", "06:00");
        let b = compute_breakdown(&record, &scenario_policy(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.worked_minutes, 420);
        assert_eq!(b.night_minutes, 360);
        // 7h * 1200 = 8400; night 6h * 1200 * 0.25 = 1800
        assert_eq!(b.base_amount, dec("8400"));
        assert_eq!(b.night_amount, dec("1800"));
        assert_eq!(b.total_amount, dec("10200"));
    }

    #[test]
    fn test_zero_duration_record() {
        let record = shift_record("2026-03-07", "10:00", "10:00");
        let b = compute_breakdown(&record, &scenario_policy(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.worked_minutes, 0);
        assert_eq!(b.base_amount, Decimal::ZERO);
        assert_eq!(b.holiday_amount, Decimal::ZERO);
        assert_eq!(b.total_amount, Decimal::ZERO);
    }

    #[test]
    fn test_overtime_boundary() {
        let at_threshold = shift_record("2026-03-02", "09:00", "17:00");
        let over_threshold = shift_record("2026-03-02", "09:00", "17:01");
        let policy = PayPolicy::default();
        let calendar = HolidayCalendar::default();

        assert_eq!(
            compute_breakdown(&at_threshold, &policy, &calendar)
                .unwrap()
                .overtime_minutes,
            0
        );
        assert_eq!(
            compute_breakdown(&over_threshold, &policy, &calendar)
                .unwrap()
                .overtime_minutes,
            1
        );
    }

    #[test]
    fn test_timecard_break_exclusion() {
        let record = timecard_record(
            "2026-03-02",
            "09:00:00",
            Some("18:00:00"),
            vec![Break {
                start: make_datetime("2026-03-02", "12:00:00"),
                end: Some(make_datetime("2026-03-02", "13:00:00")),
            }],
        );
        let b = compute_breakdown(&record, &PayPolicy::default(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.break_minutes, 60);
        assert_eq!(b.worked_minutes, 480);
        assert_eq!(b.overtime_minutes, 0);
    }

    #[test]
    fn test_timecard_open_break_not_subtracted() {
        let record = timecard_record(
            "2026-03-02",
            "09:00:00",
            Some("12:00:00"),
            vec![Break {
                start: make_datetime("2026-03-02", "11:00:00"),
                end: None,
            }],
        );
        let b = compute_breakdown(&record, &PayPolicy::default(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.break_minutes, 0);
        assert_eq!(b.worked_minutes, 180);
    }

    #[test]
    fn test_timecard_breaks_longer_than_span_floor_at_zero() {
        let record = timecard_record(
            "2026-03-02",
            "09:00:00",
            Some("10:00:00"),
            vec![Break {
                start: make_datetime("2026-03-02", "08:00:00"),
                end: Some(make_datetime("2026-03-02", "11:00:00")),
            }],
        );
        let b = compute_breakdown(&record, &PayPolicy::default(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.worked_minutes, 0);
        assert_eq!(b.total_amount, Decimal::ZERO);
    }

    #[test]
    fn test_incomplete_timecard_counts_zero() {
        let record = timecard_record("2026-03-07", "22:00:00", None, vec![]);
        let b = compute_breakdown(&record, &scenario_policy(), &HolidayCalendar::default()).unwrap();

        assert!(!b.is_complete);
        assert_eq!(b.worked_minutes, 0);
        assert_eq!(b.night_minutes, 0);
        assert_eq!(b.total_amount, Decimal::ZERO);
    }

    #[test]
    fn test_night_shift_on_public_holiday_stacks_premiums() {
        // Friday 2026-03-20 is a public holiday in this calendar
        let calendar = HolidayCalendar::new(vec![PublicHoliday {
            date: make_date("2026-03-20"),
            name: "Vernal Equinox Day".to_string(),
        }]);
        let record = shift_record("2026-03-20", "20:00", "23:00");
        let b = compute_breakdown(&record, &scenario_policy(), &calendar).unwrap();

        // base 3h * 1200 = 3600, night 1h * 1200 * 0.25 = 300, holiday 3600 * 0.35 = 1260
        assert_eq!(b.base_amount, dec("3600"));
        assert_eq!(b.night_amount, dec("300"));
        assert_eq!(b.holiday_amount, dec("1260"));
        assert_eq!(b.total_amount, dec("5160"));
    }

    #[test]
    fn test_disabled_premiums() {
        let record = shift_record("2026-03-07", "20:00", "06:00");
        let b = compute_breakdown(&record, &no_premium_policy(), &HolidayCalendar::default()).unwrap();

        assert_eq!(b.worked_minutes, 600);
        assert_eq!(b.night_minutes, 0);
        assert_eq!(b.overtime_minutes, 0);
        assert!(!b.is_holiday);
        assert_eq!(b.total_amount, dec("11000"));
    }

    #[test]
    fn test_total_rounds_half_up() {
        // 1001 * 1 / 60 = 16.683..., night and overtime off, weekday
        let mut record = shift_record("2026-03-02", "09:00", "09:01");
        record.hourly_wage = Some(dec("1001"));
        let b = compute_breakdown(&record, &no_premium_policy(), &HolidayCalendar::default()).unwrap();

        assert!(b.base_amount > dec("16.68") && b.base_amount < dec("16.69"));
        assert_eq!(b.total_amount, dec("17"));
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        let record = shift_record("2026-03-02", "9am", "17:00");
        let result = compute_breakdown(&record, &PayPolicy::default(), &HolidayCalendar::default());

        match result {
            Err(PayrollError::InvalidFormat { value }) => assert_eq!(value, "9am"),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let record = shift_record("2026-03-07", "21:30", "07:15");
        let policy = scenario_policy();
        let calendar = HolidayCalendar::default();

        let first = compute_breakdown_traced(&record, &policy, &calendar).unwrap();
        let second = compute_breakdown_traced(&record, &policy, &calendar).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_audit_trail_order() {
        let record = shift_record("2026-03-07", "18:00", "23:00");
        let result =
            compute_breakdown_traced(&record, &scenario_policy(), &HolidayCalendar::default()).unwrap();

        let rule_ids: Vec<&str> = result.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "wage_resolution",
                "worked_minutes",
                "night_premium",
                "overtime_detection",
                "holiday_premium",
                "record_total"
            ]
        );
        let step_numbers: Vec<u32> = result.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3, 4, 5, 6]);
    }
}
