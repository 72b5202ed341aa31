// File: crates/timewrap-core/src/span.rs
// Summary: Calendar-aware durations and date arithmetic over naive timestamps.

use chrono::{Datelike, Duration, Months, NaiveDateTime};

/// Calendar unit for a [`Span`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

/// A duration expressed in a specific calendar unit. Month and year spans are
/// not a fixed number of seconds: adding one month covers 28-31 days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub amount: i64,
    pub unit: TimeUnit,
}

impl Span {
    pub const fn new(amount: i64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }
}

/// Advance `date` by `amount` of `unit`. Month and year shifts clamp the
/// day-of-month to the target month's length (Jan 31 + 1 month = Feb 28).
pub fn add(date: NaiveDateTime, amount: i64, unit: TimeUnit) -> NaiveDateTime {
    match unit {
        TimeUnit::Seconds => date + Duration::seconds(amount),
        TimeUnit::Minutes => date + Duration::minutes(amount),
        TimeUnit::Hours => date + Duration::hours(amount),
        TimeUnit::Days => date + Duration::days(amount),
        TimeUnit::Months => shift_months(date, amount),
        TimeUnit::Years => shift_months(date, amount * 12),
    }
}

/// Step `date` back by `amount` of `unit`.
pub fn subtract(date: NaiveDateTime, amount: i64, unit: TimeUnit) -> NaiveDateTime {
    add(date, -amount, unit)
}

/// Whole units between `earlier` and `later`, truncated toward zero.
pub fn diff(later: NaiveDateTime, earlier: NaiveDateTime, unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Seconds => (later - earlier).num_seconds(),
        TimeUnit::Minutes => (later - earlier).num_minutes(),
        TimeUnit::Hours => (later - earlier).num_hours(),
        TimeUnit::Days => (later - earlier).num_days(),
        TimeUnit::Months => month_diff(later, earlier),
        TimeUnit::Years => month_diff(later, earlier) / 12,
    }
}

fn shift_months(date: NaiveDateTime, months: i64) -> NaiveDateTime {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
            .unwrap_or(NaiveDateTime::MAX)
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs() as u32))
            .unwrap_or(NaiveDateTime::MIN)
    }
}

fn month_diff(later: NaiveDateTime, earlier: NaiveDateTime) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());
    // The raw count overshoots when the later day-of-month comes earlier in
    // its month (Jan 31 -> Mar 1 is one whole month, not two).
    if months > 0 && shift_months(earlier, months) > later {
        months -= 1;
    } else if months < 0 && shift_months(earlier, months) < later {
        months += 1;
    }
    months
}
