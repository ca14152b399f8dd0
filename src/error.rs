//! Error types for the shift payroll engine.
//!
//! The computation core only ever fails on malformed clock strings; the
//! remaining variants belong to the configuration and workflow surfaces
//! that sit around it.

use thiserror::Error;

/// The main error type for the shift payroll engine.
///
/// # Example
///
/// ```
/// use shift_payroll::error::PayrollError;
///
/// let error = PayrollError::InvalidFormat {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format: '25:00' (expected HH:MM)");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A clock string did not match `HH:MM` or was out of range.
    #[error("Invalid time format: '{value}' (expected HH:MM)")]
    InvalidFormat {
        /// The offending input.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value is outside the range accepted by the configuration surface.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The dotted path of the field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A record status change that the approval workflow does not allow.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },

    /// A calendar month that does not exist.
    #[error("Invalid pay period: {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_displays_value() {
        let error = PayrollError::InvalidFormat {
            value: "9am".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time format: '9am' (expected HH:MM)"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/policy.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/policy.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = PayrollError::InvalidPolicy {
            field: "night.rate".to_string(),
            message: "must be between 0 and 2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy field 'night.rate': must be between 0 and 2"
        );
    }

    #[test]
    fn test_invalid_transition_displays_statuses() {
        let error = PayrollError::InvalidTransition {
            from: "rejected".to_string(),
            to: "approved".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid status transition from rejected to approved"
        );
    }

    #[test]
    fn test_invalid_period_pads_month() {
        let error = PayrollError::InvalidPeriod { year: 2026, month: 13 };
        assert_eq!(error.to_string(), "Invalid pay period: 2026-13");
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_format() -> PayrollResult<()> {
            Err(PayrollError::InvalidFormat {
                value: "x".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_invalid_format()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
