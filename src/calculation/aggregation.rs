//! Aggregation of record breakdowns into payroll summaries.
//!
//! The aggregator is status-agnostic: callers pick which records feed a
//! live estimate or a finalized report with [`filter_for_estimate`] and
//! [`filter_for_report`] before calling it.
//!
//! Transport allowance is granted once per distinct calendar date, however
//! many records fall on that date.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::{
    AttendanceRecord, DailySummary, EmployeeSummary, HolidayCalendar, PayBreakdown,
    PayrollSummary,
};

use super::breakdown::compute_breakdown;
use super::money::{apply_rate, round_currency, sum_amounts};

/// Folds already-computed breakdowns into a summary.
///
/// Component sums are kept at full precision; `grand_total` is rounded once.
pub fn summarize(breakdowns: &[PayBreakdown], policy: &PayPolicy) -> PayrollSummary {
    let days: BTreeSet<NaiveDate> = breakdowns.iter().map(|b| b.date).collect();
    let unique_days_worked = days.len() as u32;

    let mut summary = PayrollSummary {
        unique_days_worked,
        record_count: breakdowns.len() as u32,
        ..PayrollSummary::default()
    };

    for b in breakdowns {
        summary.worked_minutes += b.worked_minutes;
        summary.night_minutes += b.night_minutes;
        summary.overtime_minutes += b.overtime_minutes;
        summary.base_amount = summary.base_amount.saturating_add(b.base_amount);
        summary.night_amount = summary.night_amount.saturating_add(b.night_amount);
        summary.overtime_amount = summary.overtime_amount.saturating_add(b.overtime_amount);
        summary.holiday_amount = summary.holiday_amount.saturating_add(b.holiday_amount);
    }

    summary.transport_amount = if policy.transport.enabled {
        apply_rate(policy.transport.per_day_amount, Decimal::from(unique_days_worked))
    } else {
        Decimal::ZERO
    };

    summary.grand_total = round_currency(sum_amounts([
        summary.base_amount,
        summary.night_amount,
        summary.overtime_amount,
        summary.holiday_amount,
        summary.transport_amount,
    ]));

    summary
}

/// Computes a breakdown for every record.
pub fn compute_breakdowns(
    records: &[AttendanceRecord],
    policy: &PayPolicy,
    calendar: &HolidayCalendar,
) -> PayrollResult<Vec<PayBreakdown>> {
    records
        .iter()
        .map(|record| compute_breakdown(record, policy, calendar))
        .collect()
}

/// Aggregates one employee's records for one period.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::aggregate;
/// use shift_payroll::config::PayPolicy;
/// use shift_payroll::models::{AttendanceRecord, HolidayCalendar, RecordStatus, RecordTimes};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let split_shift = |id: &str, start: &str, end: &str| AttendanceRecord {
///     id: id.to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     status: RecordStatus::Approved,
///     hourly_wage: None,
///     times: RecordTimes::Shift { start: start.to_string(), end: end.to_string() },
/// };
///
/// let mut policy = PayPolicy::default();
/// policy.transport.enabled = true;
/// policy.transport.per_day_amount = Decimal::new(300, 0);
///
/// let records = vec![split_shift("a", "09:00", "12:00"), split_shift("b", "13:00", "18:00")];
/// let summary = aggregate(&records, &policy, &HolidayCalendar::default()).unwrap();
///
/// assert_eq!(summary.unique_days_worked, 1);
/// assert_eq!(summary.transport_amount, Decimal::new(300, 0));
/// ```
pub fn aggregate(
    records: &[AttendanceRecord],
    policy: &PayPolicy,
    calendar: &HolidayCalendar,
) -> PayrollResult<PayrollSummary> {
    let breakdowns = compute_breakdowns(records, policy, calendar)?;
    let summary = summarize(&breakdowns, policy);

    debug!(
        records = summary.record_count,
        days = summary.unique_days_worked,
        grand_total = %summary.grand_total,
        "Aggregated payroll summary"
    );

    Ok(summary)
}

/// Groups records by employee and aggregates each group.
///
/// Results are ordered by employee id.
pub fn aggregate_by_employee(
    records: &[AttendanceRecord],
    policy: &PayPolicy,
    calendar: &HolidayCalendar,
) -> PayrollResult<Vec<EmployeeSummary>> {
    group_by_employee(records)
        .into_iter()
        .map(|(employee_id, group)| {
            Ok(EmployeeSummary {
                employee_id,
                summary: aggregate(&group, policy, calendar)?,
            })
        })
        .collect()
}

/// Per-date totals over a set of records, ordered by date.
pub fn aggregate_by_date(
    records: &[AttendanceRecord],
    policy: &PayPolicy,
    calendar: &HolidayCalendar,
) -> PayrollResult<Vec<DailySummary>> {
    let breakdowns = compute_breakdowns(records, policy, calendar)?;
    Ok(daily_rows(&breakdowns))
}

/// Builds per-date rows from already-computed breakdowns.
pub fn daily_rows(breakdowns: &[PayBreakdown]) -> Vec<DailySummary> {
    let mut by_date: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    for b in breakdowns {
        let row = by_date.entry(b.date).or_insert_with(|| DailySummary {
            date: b.date,
            record_count: 0,
            worked_minutes: 0,
            total_amount: Decimal::ZERO,
        });
        row.record_count += 1;
        row.worked_minutes += b.worked_minutes;
        row.total_amount = row.total_amount.saturating_add(b.total_amount);
    }

    by_date.into_values().collect()
}

/// Splits records into per-employee groups, ordered by employee id.
pub fn group_by_employee(records: &[AttendanceRecord]) -> BTreeMap<String, Vec<AttendanceRecord>> {
    let mut groups: BTreeMap<String, Vec<AttendanceRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.employee_id.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// Keeps the records that belong in a live estimate (draft, pending, approved).
pub fn filter_for_estimate(records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.status.counts_toward_estimate())
        .cloned()
        .collect()
}

/// Keeps the records that may be frozen into a finalized report (approved).
pub fn filter_for_report(records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.status.is_final_payable())
        .cloned()
        .collect()
}
