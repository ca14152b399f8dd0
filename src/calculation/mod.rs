//! Calculation logic for the shift payroll engine.
//!
//! This module contains the clock-time arithmetic, the premium rules (night,
//! overtime, holiday), the per-record breakdown that composes them, and the
//! aggregation of breakdowns into per-employee, per-date and monthly totals.
//!
//! Every function here is pure: inputs in, values out, no I/O.

mod aggregation;
mod breakdown;
mod holiday;
mod money;
mod night_premium;
mod overtime;
mod report;
mod time;

pub use aggregation::{
    aggregate, aggregate_by_date, aggregate_by_employee, compute_breakdowns, daily_rows,
    filter_for_estimate, filter_for_report, group_by_employee, summarize,
};
pub use breakdown::{compute_breakdown, compute_breakdown_traced};
pub use holiday::{
    DayType, HolidayPremiumResult, calculate_holiday_premium, get_day_type, is_holiday_day,
};
pub use money::{apply_rate, pay_for_minutes, round_currency, sum_amounts};
pub use night_premium::{NightPremiumResult, calculate_night_premium};
pub use overtime::{OvertimeDetection, detect_overtime};
pub use report::build_monthly_report;
pub use time::{
    MINUTES_PER_DAY, format_minutes, minutes_between, night_minutes_in_range,
    night_minutes_between, night_minutes_in_span, overlap_minutes, shift_span, to_minutes,
};
