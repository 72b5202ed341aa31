// File: crates/timewrap-core/src/granularity.rs
// Summary: Calendar bucket sizes: selection from total span, group keys, fill steps.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::estimate::MIN_SECONDS_PER_DAY;
use crate::span::{Span, TimeUnit};

/// Calendar bucket size used to group a series for wrap-around comparison,
/// ordered by increasing scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Granularity {
    Hour,
    SixHour,
    TwelveHour,
    Day,
    Week,
    Month,
    ThreeMonth,
    Year,
}

impl Granularity {
    /// Map a total covered duration (seconds) to a bucket size. Total and
    /// deterministic; every duration selects exactly one level.
    pub fn from_total_span(total_span: i64) -> Self {
        if total_span < MIN_SECONDS_PER_DAY {
            Granularity::Hour
        } else if total_span < 2 * MIN_SECONDS_PER_DAY {
            Granularity::SixHour
        } else if total_span < 4 * MIN_SECONDS_PER_DAY {
            Granularity::TwelveHour
        } else if total_span < 14 * MIN_SECONDS_PER_DAY {
            Granularity::Day
        } else if total_span < 60 * MIN_SECONDS_PER_DAY {
            Granularity::Week
        } else if total_span < 365 * MIN_SECONDS_PER_DAY {
            Granularity::Month
        } else if total_span < 2 * 365 * MIN_SECONDS_PER_DAY {
            Granularity::ThreeMonth
        } else {
            Granularity::Year
        }
    }

    /// Bucket key for `date`. Keys are zero-padded so lexicographic order is
    /// chronological order.
    pub fn group_key(self, date: NaiveDateTime) -> String {
        match self {
            Granularity::Hour => {
                format!("{:04}-{:03}-{:02}", date.year(), date.ordinal(), date.hour())
            }
            Granularity::SixHour => {
                format!("{:04}-{:03}-{}", date.year(), date.ordinal(), date.hour() / 6)
            }
            Granularity::TwelveHour => {
                format!("{:04}-{:03}-{}", date.year(), date.ordinal(), date.hour() / 12)
            }
            Granularity::Day => format!("{:04}-{:03}", date.year(), date.ordinal()),
            Granularity::Week => {
                let (year, week) = week_of_year(date);
                format!("{year:04}-{week:02}")
            }
            Granularity::Month => format!("{:04}-{:02}", date.year(), date.month()),
            Granularity::ThreeMonth => format!("{:04}-{}", date.year(), date.month0() / 3 + 1),
            Granularity::Year => format!("{:04}", date.year()),
        }
    }

    /// Step used to rebuild a partition's full position grid. Decoupled from
    /// the raw sampling rate so partitions of mixed or irregular sampling
    /// still align on a sensible calendar grid.
    pub fn fill_step(self, point_span: Span) -> Span {
        match self {
            Granularity::Hour => {
                let minutes = match point_span.unit {
                    TimeUnit::Seconds => (point_span.amount / 60) % 60,
                    TimeUnit::Minutes => point_span.amount % 60,
                    _ => 0,
                };
                if minutes > 0 && 60 % minutes == 0 {
                    Span::new(minutes, TimeUnit::Minutes)
                } else {
                    Span::new(1, TimeUnit::Minutes)
                }
            }
            Granularity::SixHour | Granularity::TwelveHour | Granularity::Day => {
                Span::new(1, TimeUnit::Hours)
            }
            Granularity::Week | Granularity::Month => Span::new(1, TimeUnit::Days),
            Granularity::ThreeMonth | Granularity::Year => Span::new(1, TimeUnit::Months),
        }
    }
}

/// Sunday-based week of year: week 1 is the Sun-Sat week containing Jan 1.
fn week_of_year(date: NaiveDateTime) -> (i32, u32) {
    let year = date.year();
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_else(|| date.date());
    let offset = jan1.weekday().num_days_from_sunday();
    (year, (date.ordinal0() + offset) / 7 + 1)
}
