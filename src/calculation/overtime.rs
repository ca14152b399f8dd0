//! Overtime detection.
//!
//! Minutes worked beyond the daily threshold earn the overtime premium. The
//! threshold is applied to each record on its own, so two records on the same
//! date are each measured against the full threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::OvertimePolicy;
use crate::models::AuditStep;

use super::money::{apply_rate, pay_for_minutes};
use super::time::format_minutes;

/// The result of detecting overtime for one record.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::detect_overtime;
/// use shift_payroll::config::OvertimePolicy;
/// use rust_decimal::Decimal;
///
/// let result = detect_overtime(540, Decimal::new(1200, 0), &OvertimePolicy::default(), 1);
/// assert_eq!(result.regular_minutes, 480);
/// assert_eq!(result.overtime_minutes, 60);
/// assert_eq!(result.amount, Decimal::new(300, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeDetection {
    /// Worked minutes up to the threshold.
    pub regular_minutes: i64,
    /// Worked minutes beyond the threshold.
    pub overtime_minutes: i64,
    /// The premium amount, at full precision.
    pub amount: Decimal,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Splits worked minutes at the policy threshold and prices the excess.
///
/// A record of exactly the threshold has no overtime. When the premium is
/// disabled every minute is regular.
pub fn detect_overtime(
    worked_minutes: i64,
    hourly: Decimal,
    policy: &OvertimePolicy,
    step_number: u32,
) -> OvertimeDetection {
    let threshold = policy.daily_threshold_minutes;

    let overtime_minutes = if policy.enabled {
        (worked_minutes - threshold).max(0)
    } else {
        0
    };
    let regular_minutes = (worked_minutes - overtime_minutes).max(0);
    let amount = apply_rate(pay_for_minutes(hourly, overtime_minutes), policy.rate);

    let reasoning = if !policy.enabled {
        "Overtime premium disabled by policy".to_string()
    } else if overtime_minutes > 0 {
        format!(
            "{} worked exceeds {} threshold by {}, triggering overtime",
            format_minutes(worked_minutes),
            format_minutes(threshold),
            format_minutes(overtime_minutes)
        )
    } else if worked_minutes == threshold {
        format!(
            "{} worked equals {} threshold, no overtime triggered",
            format_minutes(worked_minutes),
            format_minutes(threshold)
        )
    } else {
        format!(
            "{} worked is under {} threshold, no overtime triggered",
            format_minutes(worked_minutes),
            format_minutes(threshold)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_detection".to_string(),
        rule_name: "Daily Overtime Detection".to_string(),
        input: serde_json::json!({
            "worked_minutes": worked_minutes,
            "threshold_minutes": threshold,
            "enabled": policy.enabled,
            "rate": policy.rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_minutes": regular_minutes,
            "overtime_minutes": overtime_minutes,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    OvertimeDetection {
        regular_minutes,
        overtime_minutes,
        amount,
        audit_step,
    }
}
