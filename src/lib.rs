//! Payroll engine for hourly shift work
//!
//! This crate turns attendance records (planned shifts or clocked timecards)
//! into pay breakdowns under a configurable policy: base pay, night premium,
//! per-record overtime, holiday premium, and a once-per-day transport
//! allowance applied at aggregation time.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
