//! Request types for the payroll API.
//!
//! Every request may carry its own `policy`; when omitted the server's
//! loaded policy is used.

use serde::{Deserialize, Serialize};

use crate::config::PayPolicy;
use crate::models::AttendanceRecord;

/// Request body for `POST /breakdown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The record to price.
    pub record: AttendanceRecord,
    /// Optional policy override.
    #[serde(default)]
    pub policy: Option<PayPolicy>,
}

/// Request body for `POST /estimate`.
///
/// Records in any status may be submitted; only draft, pending and approved
/// records count toward the estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The records to estimate.
    pub records: Vec<AttendanceRecord>,
    /// Optional policy override.
    #[serde(default)]
    pub policy: Option<PayPolicy>,
}

/// Request body for `POST /reports/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReportRequest {
    /// Calendar year of the report.
    pub year: i32,
    /// Calendar month of the report, 1 through 12.
    pub month: u32,
    /// Candidate records; only approved records inside the month are kept.
    pub records: Vec<AttendanceRecord>,
    /// Optional policy override.
    #[serde(default)]
    pub policy: Option<PayPolicy>,
}
