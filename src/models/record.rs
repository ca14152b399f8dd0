//! Attendance record model and related types.
//!
//! An attendance record is either a manager-approved shift, given as
//! wall-clock `HH:MM` strings, or a timecard day, given as clock-in and
//! clock-out instants with break intervals.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A break taken during a timecard day.
///
/// A break without an end is still open and contributes nothing to the
/// break total until it is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Break {
    /// The start of the break.
    pub start: NaiveDateTime,
    /// The end of the break, if it has been closed.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
}

impl Break {
    /// Returns the break length in whole minutes, floored at zero.
    ///
    /// Open breaks return zero.
    pub fn duration_minutes(&self) -> i64 {
        match self.end {
            Some(end) => (end - self.start).num_minutes().max(0),
            None => 0,
        }
    }

    /// Returns true if the instant falls inside this (closed) break.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        match self.end {
            Some(end) => instant >= self.start && instant < end,
            None => false,
        }
    }
}

/// The timing of an attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordTimes {
    /// An approved shift with wall-clock times on the record date.
    ///
    /// An `end` earlier than `start` means the shift runs past midnight.
    Shift {
        /// Start time as `HH:MM`.
        start: String,
        /// End time as `HH:MM`.
        end: String,
    },
    /// A timecard day with absolute punches.
    Timecard {
        /// Clock-in instant.
        clock_in: NaiveDateTime,
        /// Clock-out instant; absent while the employee is still working.
        #[serde(default)]
        clock_out: Option<NaiveDateTime>,
        /// Breaks taken during the day.
        #[serde(default)]
        breaks: Vec<Break>,
    },
}

/// Approval status of an attendance record.
///
/// The workflow is `draft -> pending -> {approved, rejected}`, and an approved
/// record can be reverted back into review via `approved -> reverted -> pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Created by the employee, not yet submitted.
    Draft,
    /// Submitted and waiting for a manager.
    #[default]
    Pending,
    /// Accepted by a manager.
    Approved,
    /// Declined by a manager.
    Rejected,
    /// Approval withdrawn; must be resubmitted.
    Reverted,
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Draft => write!(f, "draft"),
            RecordStatus::Pending => write!(f, "pending"),
            RecordStatus::Approved => write!(f, "approved"),
            RecordStatus::Rejected => write!(f, "rejected"),
            RecordStatus::Reverted => write!(f, "reverted"),
        }
    }
}

impl RecordStatus {
    /// Returns true if the workflow allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: RecordStatus) -> bool {
        use RecordStatus::*;
        matches!(
            (self, next),
            (Draft, Pending)
                | (Pending, Approved)
                | (Pending, Rejected)
                | (Approved, Reverted)
                | (Reverted, Pending)
        )
    }

    /// Moves to `next`, or fails with [`PayrollError::InvalidTransition`].
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::RecordStatus;
    ///
    /// let status = RecordStatus::Draft.transition_to(RecordStatus::Pending).unwrap();
    /// assert_eq!(status, RecordStatus::Pending);
    /// assert!(RecordStatus::Rejected.transition_to(RecordStatus::Approved).is_err());
    /// ```
    pub fn transition_to(self, next: RecordStatus) -> PayrollResult<RecordStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(PayrollError::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }

    /// Returns true if the record may be frozen into a finalized monthly report.
    pub fn is_final_payable(self) -> bool {
        self == RecordStatus::Approved
    }

    /// Returns true if the record belongs in a live estimate shown to the employee.
    pub fn counts_toward_estimate(self) -> bool {
        matches!(
            self,
            RecordStatus::Draft | RecordStatus::Pending | RecordStatus::Approved
        )
    }
}

/// One attendance entry for one employee on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The worker the record belongs to.
    pub employee_id: String,
    /// The calendar date used for grouping and holiday detection.
    pub date: NaiveDate,
    /// Approval status; the engine itself never reads it.
    #[serde(default)]
    pub status: RecordStatus,
    /// Per-record wage override; the policy default applies when absent.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
    /// Start/end information.
    #[serde(flatten)]
    pub times: RecordTimes,
}

impl AttendanceRecord {
    /// Returns the day of the week of the record date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns false for a timecard that has not been clocked out yet.
    pub fn is_complete(&self) -> bool {
        match &self.times {
            RecordTimes::Shift { .. } => true,
            RecordTimes::Timecard { clock_out, .. } => clock_out.is_some(),
        }
    }
}
