//! Pay policy configuration types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files or request bodies. Every field
//! has a default so partially specified organization settings still produce
//! a complete policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::to_minutes;
use crate::error::{PayrollError, PayrollResult};

/// Upper bound accepted for premium rates by [`PayPolicy::validate`].
const MAX_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Night premium settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightPolicy {
    /// Whether the night premium applies.
    pub enabled: bool,
    /// Premium as a fraction of the hourly wage (0.25 = +25%).
    pub rate: Decimal,
    /// Window start as `HH:MM`.
    pub window_start: String,
    /// Window end as `HH:MM`; earlier than the start when the window wraps midnight.
    pub window_end: String,
}

impl Default for NightPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: Decimal::new(25, 2),
            window_start: "22:00".to_string(),
            window_end: "05:00".to_string(),
        }
    }
}

/// Overtime premium settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimePolicy {
    /// Whether the overtime premium applies.
    pub enabled: bool,
    /// Premium as a fraction of the hourly wage.
    pub rate: Decimal,
    /// Worked minutes per record before overtime starts.
    pub daily_threshold_minutes: i64,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: Decimal::new(25, 2),
            daily_threshold_minutes: 480,
        }
    }
}

/// Holiday premium settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayPolicy {
    /// Whether the holiday premium applies.
    pub enabled: bool,
    /// Premium as a fraction of the hourly wage.
    pub rate: Decimal,
    /// Whether Saturdays and Sundays count as holidays.
    pub includes_weekend: bool,
}

impl Default for HolidayPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: Decimal::new(35, 2),
            includes_weekend: true,
        }
    }
}

/// Transport allowance settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportPolicy {
    /// Whether the allowance is paid.
    pub enabled: bool,
    /// Amount paid once per calendar day worked.
    pub per_day_amount: Decimal,
}

/// An organization's pay rules.
///
/// The engine treats a policy as an immutable snapshot and never validates or
/// clamps it; [`PayPolicy::validate`] is for whoever writes the policy.
///
/// # Example
///
/// ```
/// use shift_payroll::config::PayPolicy;
/// use rust_decimal::Decimal;
///
/// let policy: PayPolicy = serde_yaml::from_str("default_hourly_wage: \"1200\"").unwrap();
/// assert_eq!(policy.default_hourly_wage, Decimal::new(1200, 0));
/// assert_eq!(policy.overtime.daily_threshold_minutes, 480);
/// assert!(!policy.transport.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayPolicy {
    /// Hourly wage used when a record carries no override.
    pub default_hourly_wage: Decimal,
    /// Night premium.
    pub night: NightPolicy,
    /// Overtime premium.
    pub overtime: OvertimePolicy,
    /// Holiday premium.
    pub holiday: HolidayPolicy,
    /// Transport allowance.
    pub transport: TransportPolicy,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            default_hourly_wage: Decimal::new(1100, 0),
            night: NightPolicy::default(),
            overtime: OvertimePolicy::default(),
            holiday: HolidayPolicy::default(),
            transport: TransportPolicy::default(),
        }
    }
}

impl PayPolicy {
    /// Checks the ranges enforced when a policy is saved.
    ///
    /// Wage must be positive, rates must lie in `[0, 2]`, the overtime
    /// threshold in `[0, 1440]`, the per-day transport amount must not be
    /// negative, and the night window must parse.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.default_hourly_wage <= Decimal::ZERO {
            return Err(invalid("default_hourly_wage", "must be greater than 0"));
        }

        for (field, rate) in [
            ("night.rate", self.night.rate),
            ("overtime.rate", self.overtime.rate),
            ("holiday.rate", self.holiday.rate),
        ] {
            if rate < Decimal::ZERO || rate > MAX_RATE {
                return Err(invalid(field, "must be between 0 and 2"));
            }
        }

        if !(0..=1440).contains(&self.overtime.daily_threshold_minutes) {
            return Err(invalid(
                "overtime.daily_threshold_minutes",
                "must be between 0 and 1440",
            ));
        }

        if self.transport.per_day_amount < Decimal::ZERO {
            return Err(invalid("transport.per_day_amount", "must not be negative"));
        }

        to_minutes(&self.night.window_start)
            .map_err(|e| invalid("night.window_start", &e.to_string()))?;
        to_minutes(&self.night.window_end)
            .map_err(|e| invalid("night.window_end", &e.to_string()))?;

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> PayrollError {
    PayrollError::InvalidPolicy {
        field: field.to_string(),
        message: message.to_string(),
    }
}
