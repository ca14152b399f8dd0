//! Night premium calculation.
//!
//! Worked minutes inside the configured night window earn an extra
//! `rate` on top of base pay. Shifts are measured with interval overlap;
//! timecards subtract closed breaks from the night window so that breaks
//! taken during the night do not earn the premium.

use rust_decimal::Decimal;

use crate::config::NightPolicy;
use crate::error::PayrollResult;
use crate::models::{AuditStep, RecordTimes};

use super::money::{apply_rate, pay_for_minutes};
use super::time::{
    format_minutes, night_minutes_between, night_minutes_in_span, shift_span, to_minutes,
};

/// The result of a night premium calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightPremiumResult {
    /// Worked minutes inside the night window.
    pub night_minutes: i64,
    /// The premium amount, at full precision.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the night premium for one record.
///
/// Returns zero minutes when the premium is disabled or when a timecard has
/// no clock-out yet. The window strings are only parsed when the premium is
/// enabled, and a malformed window fails with `InvalidFormat`.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_night_premium;
/// use shift_payroll::config::NightPolicy;
/// use shift_payroll::models::RecordTimes;
/// use rust_decimal::Decimal;
///
/// let times = RecordTimes::Shift { start: "23:00".to_string(), end: "06:00".to_string() };
/// let result = calculate_night_premium(&times, Decimal::new(1200, 0), &NightPolicy::default(), 1).unwrap();
///
/// assert_eq!(result.night_minutes, 360);
/// assert_eq!(result.amount, Decimal::new(1800, 0));
/// ```
pub fn calculate_night_premium(
    times: &RecordTimes,
    hourly: Decimal,
    policy: &NightPolicy,
    step_number: u32,
) -> PayrollResult<NightPremiumResult> {
    if !policy.enabled {
        return Ok(NightPremiumResult {
            night_minutes: 0,
            amount: Decimal::ZERO,
            audit_step: night_step(
                step_number,
                policy,
                0,
                Decimal::ZERO,
                "Night premium disabled by policy".to_string(),
            ),
        });
    }

    let window_start = to_minutes(&policy.window_start)?;
    let window_end = to_minutes(&policy.window_end)?;

    let night_minutes = match times {
        RecordTimes::Shift { start, end } => {
            let (start, end) = shift_span(start, end)?;
            night_minutes_in_span(start, end, window_start, window_end)
        }
        RecordTimes::Timecard {
            clock_in,
            clock_out: Some(clock_out),
            breaks,
        } => night_minutes_between(*clock_in, *clock_out, breaks, window_start, window_end),
        RecordTimes::Timecard {
            clock_out: None, ..
        } => 0,
    };

    let amount = apply_rate(pay_for_minutes(hourly, night_minutes), policy.rate);

    let reasoning = if night_minutes > 0 {
        format!(
            "{} worked inside night window {}-{} at +{} of {}/h",
            format_minutes(night_minutes),
            policy.window_start,
            policy.window_end,
            policy.rate.normalize(),
            hourly.normalize()
        )
    } else {
        format!(
            "No worked time inside night window {}-{}",
            policy.window_start, policy.window_end
        )
    };

    Ok(NightPremiumResult {
        night_minutes,
        amount,
        audit_step: night_step(step_number, policy, night_minutes, amount, reasoning),
    })
}

fn night_step(
    step_number: u32,
    policy: &NightPolicy,
    night_minutes: i64,
    amount: Decimal,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "night_premium".to_string(),
        rule_name: "Night Premium".to_string(),
        input: serde_json::json!({
            "enabled": policy.enabled,
            "rate": policy.rate.normalize().to_string(),
            "window_start": policy.window_start,
            "window_end": policy.window_end
        }),
        output: serde_json::json!({
            "night_minutes": night_minutes,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    }
}
