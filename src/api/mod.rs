//! HTTP API module for the shift payroll engine.
//!
//! This module exposes the engine over three REST endpoints: a single-record
//! breakdown, a live per-employee estimate, and a finalized monthly report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BreakdownRequest, EstimateRequest, MonthlyReportRequest};
pub use response::{ApiError, ApiErrorResponse, EstimateResponse};
pub use state::AppState;
