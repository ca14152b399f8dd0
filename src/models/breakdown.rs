//! Per-record pay breakdown and audit models.
//!
//! A [`PayBreakdown`] is always derived from one attendance record and one
//! policy snapshot. It is recomputed on every read and only persisted as part
//! of a frozen monthly report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed pay components for a single attendance record.
///
/// Transport allowance is granted per calendar day and is therefore not part
/// of a record breakdown; see [`PayrollSummary`](super::PayrollSummary).
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayBreakdown;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     record_id: "rec_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     hourly_wage: Decimal::new(1200, 0),
///     is_complete: true,
///     is_holiday: false,
///     worked_minutes: 480,
///     break_minutes: 60,
///     night_minutes: 0,
///     overtime_minutes: 0,
///     base_amount: Decimal::new(9600, 0),
///     night_amount: Decimal::ZERO,
///     overtime_amount: Decimal::ZERO,
///     holiday_amount: Decimal::ZERO,
///     total_amount: Decimal::new(9600, 0),
/// };
/// assert_eq!(breakdown.premium_amount(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The record this breakdown was computed from.
    pub record_id: String,
    /// The worker the record belongs to.
    pub employee_id: String,
    /// The record's calendar date.
    pub date: NaiveDate,
    /// The hourly wage actually applied (override or policy default).
    pub hourly_wage: Decimal,
    /// False for a timecard that has not been clocked out.
    pub is_complete: bool,
    /// Whether the holiday premium applied.
    pub is_holiday: bool,
    /// Gross span minus closed breaks, floored at zero.
    pub worked_minutes: i64,
    /// Sum of closed break lengths.
    pub break_minutes: i64,
    /// Worked minutes inside the night window.
    pub night_minutes: i64,
    /// Worked minutes beyond the daily threshold.
    pub overtime_minutes: i64,
    /// Hourly wage times worked hours.
    pub base_amount: Decimal,
    /// Night premium on top of base pay.
    pub night_amount: Decimal,
    /// Overtime premium on top of base pay.
    pub overtime_amount: Decimal,
    /// Holiday premium on top of base pay.
    pub holiday_amount: Decimal,
    /// Rounded sum of the four components above.
    pub total_amount: Decimal,
}

impl PayBreakdown {
    /// Returns the unrounded sum of the three premium components.
    pub fn premium_amount(&self) -> Decimal {
        self.night_amount
            .saturating_add(self.overtime_amount)
            .saturating_add(self.holiday_amount)
    }

    /// Returns the unrounded sum of all four money components.
    pub fn unrounded_total(&self) -> Decimal {
        self.base_amount.saturating_add(self.premium_amount())
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A breakdown together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownResult {
    /// The computed breakdown.
    pub breakdown: PayBreakdown,
    /// Ordered audit steps.
    pub audit_steps: Vec<AuditStep>,
}
