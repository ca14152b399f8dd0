//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_by_employee, build_monthly_report, compute_breakdown_traced, filter_for_estimate,
};
use crate::config::PayPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::PayPeriod;

use super::request::{BreakdownRequest, EstimateRequest, MonthlyReportRequest};
use super::response::{ApiError, ApiErrorResponse, EstimateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/breakdown", post(breakdown_handler))
        .route("/estimate", post(estimate_handler))
        .route("/reports/monthly", post(monthly_report_handler))
        .with_state(state)
}

/// Handler for POST /breakdown.
///
/// Prices a single record and returns the breakdown with its audit steps.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = resolve_policy(&state, request.policy).and_then(|policy| {
        compute_breakdown_traced(&request.record, &policy, state.config().calendar())
    });

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %result.breakdown.record_id,
                employee_id = %result.breakdown.employee_id,
                total_amount = %result.breakdown.total_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Breakdown completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /estimate.
///
/// Aggregates the submitted records per employee, counting only statuses
/// that belong in a live estimate.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let counted = filter_for_estimate(&request.records);
    let result = resolve_policy(&state, request.policy).and_then(|policy| {
        aggregate_by_employee(&counted, &policy, state.config().calendar())
    });

    match result {
        Ok(employees) => {
            info!(
                correlation_id = %correlation_id,
                submitted = request.records.len(),
                counted = counted.len(),
                employees = employees.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Estimate completed successfully"
            );
            json_response(
                StatusCode::OK,
                EstimateResponse {
                    correlation_id,
                    employees,
                },
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /reports/monthly.
///
/// Freezes the approved records of one calendar month into a report.
async fn monthly_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = PayPeriod::month(request.year, request.month).and_then(|period| {
        let policy = resolve_policy(&state, request.policy)?;
        build_monthly_report(&request.records, &policy, state.config().calendar(), &period)
    });

    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                period_start = %report.period.start_date,
                records = report.record_count(),
                employees = report.employees.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Monthly report completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Picks the request's policy override, validated, or the loaded policy.
fn resolve_policy(state: &AppState, policy: Option<PayPolicy>) -> PayrollResult<PayPolicy> {
    match policy {
        Some(policy) => {
            policy.validate()?;
            Ok(policy)
        }
        None => Ok(state.config().policy().clone()),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: PayrollError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
