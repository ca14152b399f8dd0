//! Monthly report construction.
//!
//! A report freezes approved records for one calendar month. The policy in
//! effect is copied into the snapshot alongside the computed figures.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::{AttendanceRecord, EmployeeReport, HolidayCalendar, MonthlyReport, PayPeriod};

use super::aggregation::{
    compute_breakdowns, daily_rows, filter_for_report, group_by_employee, summarize,
};

/// Builds a finalized report for `period`.
///
/// Only approved records dated inside the period are included. Employees
/// are ordered by id and each employee's breakdowns by date.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::build_monthly_report;
/// use shift_payroll::config::PayPolicy;
/// use shift_payroll::models::{AttendanceRecord, HolidayCalendar, PayPeriod, RecordStatus, RecordTimes};
/// use chrono::NaiveDate;
///
/// let record = |id: &str, status: RecordStatus| AttendanceRecord {
///     id: id.to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     status,
///     hourly_wage: None,
///     times: RecordTimes::Shift { start: "09:00".to_string(), end: "17:00".to_string() },
/// };
///
/// let records = vec![record("a", RecordStatus::Approved), record("b", RecordStatus::Pending)];
/// let period = PayPeriod::month(2026, 3).unwrap();
/// let report = build_monthly_report(&records, &PayPolicy::default(), &HolidayCalendar::default(), &period).unwrap();
///
/// assert_eq!(report.record_count(), 1);
/// ```
pub fn build_monthly_report(
    records: &[AttendanceRecord],
    policy: &PayPolicy,
    calendar: &HolidayCalendar,
    period: &PayPeriod,
) -> PayrollResult<MonthlyReport> {
    let approved: Vec<AttendanceRecord> = filter_for_report(records)
        .into_iter()
        .filter(|r| period.contains_date(r.date))
        .collect();

    let mut employees = Vec::new();
    for (employee_id, group) in group_by_employee(&approved) {
        let mut breakdowns = compute_breakdowns(&group, policy, calendar)?;
        breakdowns.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.record_id.cmp(&b.record_id)));

        employees.push(EmployeeReport {
            employee_id,
            summary: summarize(&breakdowns, policy),
            daily: daily_rows(&breakdowns),
            breakdowns,
        });
    }

    debug!(
        period_start = %period.start_date,
        period_end = %period.end_date,
        submitted = records.len(),
        included = approved.len(),
        employees = employees.len(),
        "Built monthly report"
    );

    Ok(MonthlyReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period: period.clone(),
        policy: policy.clone(),
        employees,
    })
}
