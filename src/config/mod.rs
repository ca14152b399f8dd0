//! Configuration loading for the shift payroll engine.
//!
//! This module provides the pay policy types and a loader that reads an
//! organization's policy and holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::PolicyLoader;
//!
//! let config = PolicyLoader::load("./config/default").unwrap();
//! println!("Night premium: {}", config.policy().night.rate);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{HolidayPolicy, NightPolicy, OvertimePolicy, PayPolicy, TransportPolicy};
