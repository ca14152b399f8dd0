//! Finalized monthly report snapshot.
//!
//! Once a period is approved the computed figures are frozen together with
//! the policy they were computed under, so later policy edits do not change
//! historical reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DailySummary, PayBreakdown, PayPeriod, PayrollSummary};
use crate::config::PayPolicy;

/// One employee's section of a monthly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// The employee identifier.
    pub employee_id: String,
    /// Period totals including transport.
    pub summary: PayrollSummary,
    /// Per-date rows, ordered by date.
    pub daily: Vec<DailySummary>,
    /// Every record breakdown that fed the summary, ordered by date.
    pub breakdowns: Vec<PayBreakdown>,
}

/// A frozen payroll report for one calendar month.
///
/// # Example
///
/// ```
/// use shift_payroll::config::PayPolicy;
/// use shift_payroll::models::{MonthlyReport, PayPeriod};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = MonthlyReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     period: PayPeriod::month(2026, 3).unwrap(),
///     policy: PayPolicy::default(),
///     employees: vec![],
/// };
/// assert_eq!(report.record_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Unique identifier for this snapshot.
    pub report_id: Uuid,
    /// When the snapshot was taken.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the figures.
    pub engine_version: String,
    /// The month covered.
    pub period: PayPeriod,
    /// The policy the figures were computed under.
    pub policy: PayPolicy,
    /// Per-employee sections, ordered by employee id.
    pub employees: Vec<EmployeeReport>,
}

impl MonthlyReport {
    /// Returns the number of records across all employees.
    pub fn record_count(&self) -> usize {
        self.employees.iter().map(|e| e.breakdowns.len()).sum()
    }

    /// Returns the section for one employee.
    pub fn employee(&self, employee_id: &str) -> Option<&EmployeeReport> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }
}
