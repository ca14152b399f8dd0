//! Core data models for the shift payroll engine.
//!
//! This module contains the attendance inputs, the computed outputs and the
//! frozen report snapshot.

mod breakdown;
mod pay_period;
mod record;
mod report;
mod summary;

pub use breakdown::{AuditStep, BreakdownResult, PayBreakdown};
pub use pay_period::{HolidayCalendar, PayPeriod, PublicHoliday, is_weekend};
pub use record::{AttendanceRecord, Break, RecordStatus, RecordTimes};
pub use report::{EmployeeReport, MonthlyReport};
pub use summary::{DailySummary, EmployeeSummary, PayrollSummary};
