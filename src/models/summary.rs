//! Aggregated payroll models.
//!
//! Summaries fold many [`PayBreakdown`](super::PayBreakdown)s together and add
//! the day-based transport allowance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay totals for one employee over one period.
///
/// Money components are carried at full precision; only `grand_total` is
/// rounded to whole currency units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of distinct dates with at least one record.
    pub unique_days_worked: u32,
    /// Number of records folded into the summary.
    pub record_count: u32,
    /// Total worked minutes.
    pub worked_minutes: i64,
    /// Total night minutes.
    pub night_minutes: i64,
    /// Total overtime minutes.
    pub overtime_minutes: i64,
    /// Total base pay.
    pub base_amount: Decimal,
    /// Total night premium.
    pub night_amount: Decimal,
    /// Total overtime premium.
    pub overtime_amount: Decimal,
    /// Total holiday premium.
    pub holiday_amount: Decimal,
    /// Days worked times the per-day transport amount.
    pub transport_amount: Decimal,
    /// Rounded sum of all money components including transport.
    pub grand_total: Decimal,
}

/// A summary tagged with the employee it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee identifier.
    pub employee_id: String,
    /// The employee's totals.
    pub summary: PayrollSummary,
}

/// Totals for a single calendar date, used for per-day report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The calendar date.
    pub date: NaiveDate,
    /// Records on that date.
    pub record_count: u32,
    /// Worked minutes on that date.
    pub worked_minutes: i64,
    /// Sum of the rounded record totals on that date.
    pub total_amount: Decimal,
}
