//! Policy configuration loading.
//!
//! This module provides the [`PolicyLoader`] type for loading an
//! organization's pay policy and holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};
use crate::models::HolidayCalendar;

use super::types::PayPolicy;

/// Loads and provides access to an organization's payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml    # Pay policy; missing fields take defaults
/// └── holidays.yaml  # public_holidays: [{ date, name }]
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/default")?;
/// println!("Default wage: {}", loader.policy().default_hourly_wage);
/// # Ok::<(), shift_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PayPolicy,
    calendar: HolidayCalendar,
}

impl PolicyLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// the policy fails [`PayPolicy::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PayPolicy>(&path.join("policy.yaml"))?;
        policy.validate()?;

        let calendar = Self::load_yaml::<HolidayCalendar>(&path.join("holidays.yaml"))?;

        Ok(Self { policy, calendar })
    }

    /// Builds a loader from values already in memory.
    pub fn from_parts(policy: PayPolicy, calendar: HolidayCalendar) -> Self {
        Self { policy, calendar }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Returns the loaded holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
