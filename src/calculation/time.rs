//! Minute-level time arithmetic.
//!
//! Clock strings are converted to integer minute offsets from midnight and
//! every difference is floored at zero, so out-of-order inputs produce zero
//! minutes rather than an error.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::error::{PayrollError, PayrollResult};
use crate::models::Break;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Parses an `HH:MM` clock string into minutes after midnight.
///
/// The hour may have one or two digits; the minute must have exactly two.
/// The result lies in `[0, 1440)`.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::to_minutes;
///
/// assert_eq!(to_minutes("00:00").unwrap(), 0);
/// assert_eq!(to_minutes("9:30").unwrap(), 570);
/// assert_eq!(to_minutes("23:59").unwrap(), 1439);
/// assert!(to_minutes("24:00").is_err());
/// assert!(to_minutes("12:5").is_err());
/// ```
pub fn to_minutes(hhmm: &str) -> PayrollResult<i64> {
    let invalid = || PayrollError::InvalidFormat {
        value: hhmm.to_string(),
    };

    let (hours, minutes) = hhmm.split_once(':').ok_or_else(invalid)?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hours) || hours.len() > 2 || !all_digits(minutes) || minutes.len() != 2 {
        return Err(invalid());
    }

    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Returns `max(0, end - start)` for two clock strings.
///
/// Midnight is not handled here: `"22:00"` to `"05:00"` yields zero. Callers
/// with overnight shifts normalize the end themselves.
pub fn minutes_between(start: &str, end: &str) -> PayrollResult<i64> {
    Ok((to_minutes(end)? - to_minutes(start)?).max(0))
}

/// Converts a shift's clock strings into a `[start, end)` minute span.
///
/// An end earlier than the start is taken to fall on the next day, so the
/// returned end may exceed 1440. Equal times give an empty span.
///
/// ```
/// use shift_payroll::calculation::shift_span;
///
/// assert_eq!(shift_span("09:00", "17:00").unwrap(), (540, 1020));
/// assert_eq!(shift_span("22:00", "05:00").unwrap(), (1320, 1740));
/// ```
pub fn shift_span(start: &str, end: &str) -> PayrollResult<(i64, i64)> {
    let start = to_minutes(start)?;
    let mut end = to_minutes(end)?;
    if end < start {
        end += MINUTES_PER_DAY;
    }
    Ok((start, end))
}

/// Length of the intersection of `[a1, a2)` and `[b1, b2)`, floored at zero.
pub fn overlap_minutes(a1: i64, a2: i64, b1: i64, b2: i64) -> i64 {
    (a2.min(b2) - a1.max(b1)).max(0)
}

/// Minutes of `[start, end)` that fall inside the night window of one day.
///
/// A window with `window_start > window_end` wraps midnight and is split into
/// a late-night segment `[window_start, 1440)` and an early-morning segment
/// `[0, window_end)`.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::night_minutes_in_range;
///
/// // 21:00-23:00 against 22:00-05:00
/// assert_eq!(night_minutes_in_range(1260, 1380, 1320, 300), 60);
/// // 03:00-07:00 against 22:00-05:00
/// assert_eq!(night_minutes_in_range(180, 420, 1320, 300), 120);
/// ```
pub fn night_minutes_in_range(start: i64, end: i64, window_start: i64, window_end: i64) -> i64 {
    if window_start <= window_end {
        overlap_minutes(start, end, window_start, window_end)
    } else {
        overlap_minutes(start, end, window_start, MINUTES_PER_DAY)
            + overlap_minutes(start, end, 0, window_end)
    }
}

/// Night minutes for a span that may continue into the next day.
///
/// `start` lies in `[0, 1440)` and `end` may reach up to `2880`. The window is
/// applied to the record day and to the following day and the overlaps are
/// summed.
pub fn night_minutes_in_span(start: i64, end: i64, window_start: i64, window_end: i64) -> i64 {
    [0, MINUTES_PER_DAY]
        .into_iter()
        .map(|offset| night_minutes_in_range(start - offset, end - offset, window_start, window_end))
        .sum()
}

/// Night minutes in `[0, t)`, where `t` counts minutes from some midnight.
fn cumulative_night_minutes(t: i64, window_start: i64, window_end: i64) -> i64 {
    let per_day = night_minutes_in_range(0, MINUTES_PER_DAY, window_start, window_end);
    t.div_euclid(MINUTES_PER_DAY) * per_day
        + night_minutes_in_range(0, t.rem_euclid(MINUTES_PER_DAY), window_start, window_end)
}

/// Whole minutes in `delta`, rounded up.
fn ceil_minutes(delta: Duration) -> i64 {
    (delta.num_seconds() + 59).div_euclid(60)
}

/// Counts night minutes between two instants, skipping closed breaks.
///
/// Minutes are the instants `clock_in + k` for whole `k`, classified by
/// their minute of day. Whole days contribute the window length at once, so
/// the cost depends on the number of breaks and not on the span length.
/// Overlapping breaks are merged before they are subtracted.
///
/// ```
/// use shift_payroll::calculation::night_minutes_between;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let clock_in = day.and_hms_opt(21, 0, 0).unwrap();
/// let clock_out = day.succ_opt().unwrap().and_hms_opt(2, 0, 0).unwrap();
///
/// // 22:00-02:00 against 22:00-05:00
/// assert_eq!(night_minutes_between(clock_in, clock_out, &[], 1320, 300), 240);
/// ```
pub fn night_minutes_between(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    breaks: &[Break],
    window_start: i64,
    window_end: i64,
) -> i64 {
    let total = (clock_out - clock_in).num_minutes();
    if total <= 0 {
        return 0;
    }

    let origin = i64::from(clock_in.time().num_seconds_from_midnight() / 60);
    let night_in = |from: i64, to: i64| {
        cumulative_night_minutes(origin + to, window_start, window_end)
            - cumulative_night_minutes(origin + from, window_start, window_end)
    };

    let mut excluded: Vec<(i64, i64)> = breaks
        .iter()
        .filter_map(|b| {
            let end = b.end?;
            let from = ceil_minutes(b.start - clock_in).clamp(0, total);
            let to = ceil_minutes(end - clock_in).clamp(0, total);
            (from < to).then_some((from, to))
        })
        .collect();
    excluded.sort_unstable();

    let mut night = night_in(0, total);
    let mut covered_to = 0;
    for (from, to) in excluded {
        let from = from.max(covered_to);
        if to > from {
            night -= night_in(from, to);
            covered_to = to;
        }
    }
    night
}

/// Renders a minute count as `H:MM`.
///
/// ```
/// use shift_payroll::calculation::format_minutes;
///
/// assert_eq!(format_minutes(480), "8:00");
/// assert_eq!(format_minutes(65), "1:05");
/// ```
pub fn format_minutes(minutes: i64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
