// File: crates/timewrap-core/src/label.rs
// Summary: Axis labels per position and human-readable per-partition series names.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::estimate::{
    span_between, MIN_SECONDS_PER_DAY, MIN_SECONDS_PER_MONTH, MIN_SECONDS_PER_YEAR,
    SECONDS_PER_HOUR,
};
use crate::granularity::Granularity;
use crate::partition::DataPoint;
use crate::span::{self, Span, TimeUnit};

/// Axis label for one position at the given granularity. An explicit `format`
/// is a chrono strftime pattern; a pattern that fails to parse or format
/// falls back to the granularity default.
pub fn label_point(date: NaiveDateTime, granularity: Granularity, format: Option<&str>) -> String {
    if let Some(text) = format.and_then(|pattern| format_date(date, pattern)) {
        return text;
    }
    match granularity {
        Granularity::Hour => format!(":{:02}", date.minute()),
        Granularity::SixHour => format!("Hour {}", date.hour() % 6 + 1),
        Granularity::TwelveHour => format!("Hour {}", date.hour() % 12 + 1),
        Granularity::Day => format!("{}{}", date.hour12().1, meridiem(date)),
        Granularity::Week => date.format("%a").to_string(),
        Granularity::Month => ordinal(date.day()),
        Granularity::ThreeMonth => format!("Month {}", date.month0() % 3 + 1),
        Granularity::Year => date.format("%B").to_string(),
    }
}

/// Attach an axis label to every point of every partition.
pub fn decorate_with_labels(
    partitions: Vec<Vec<DataPoint>>,
    granularity: Granularity,
    format: Option<&str>,
) -> Vec<Vec<DataPoint>> {
    partitions
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .map(|mut point| {
                    point.label = Some(label_point(point.date, granularity, format));
                    point
                })
                .collect()
        })
        .collect()
}

/// Human-readable name per partition, spanning its first date to one step
/// past its last. The naming granularity is recomputed from the first
/// partition's own span, so partially-processed partitions still name
/// themselves sensibly regardless of how the series was bucketed.
pub fn series_names(partitions: &[Vec<DataPoint>], format: Option<&str>) -> Vec<String> {
    let Some(granularity) = granularity_of_partitions(partitions) else {
        return Vec::new();
    };
    partitions
        .iter()
        .map(|partition| match partition_range(partition) {
            Some((start, end)) => name_range(start, end, granularity, format),
            None => String::new(),
        })
        .collect()
}

/// "Aug 16th" style month + ordinal day.
pub fn month_day_ordinal(date: NaiveDateTime) -> String {
    format!("{} {}", date.format("%b"), ordinal(date.day()))
}

/// "11:00 PM" style twelve-hour clock time.
pub fn clock_time(date: NaiveDateTime) -> String {
    format!("{}:{:02} {}", date.hour12().1, date.minute(), meridiem(date))
}

/// Format via a strftime pattern without panicking: `None` when the pattern
/// has unparseable tokens or fields unavailable on a naive timestamp. Callers
/// applying explicit format overrides use this to decide whether to fall back.
pub fn format_date(date: NaiveDateTime, pattern: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut out = String::new();
    if write!(out, "{}", date.format_with_items(items.into_iter())).is_err() {
        return None;
    }
    Some(out)
}

// ---- helpers ----------------------------------------------------------------

fn granularity_of_partitions(partitions: &[Vec<DataPoint>]) -> Option<Granularity> {
    let (start, end) = partition_range(partitions.first()?)?;
    let partition_span = span::diff(end, start, TimeUnit::Seconds);
    Some(if partition_span >= MIN_SECONDS_PER_YEAR {
        Granularity::Year
    } else if partition_span >= 3 * MIN_SECONDS_PER_MONTH {
        Granularity::ThreeMonth
    } else if partition_span >= MIN_SECONDS_PER_MONTH {
        Granularity::Month
    } else if partition_span >= 7 * MIN_SECONDS_PER_DAY {
        Granularity::Week
    } else if partition_span >= MIN_SECONDS_PER_DAY {
        Granularity::Day
    } else if partition_span >= 12 * SECONDS_PER_HOUR {
        Granularity::TwelveHour
    } else if partition_span >= 6 * SECONDS_PER_HOUR {
        Granularity::SixHour
    } else {
        Granularity::Hour
    })
}

/// A partition's covered range: first date through one of its own point spans
/// past its last date.
fn partition_range(partition: &[DataPoint]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let first = partition.first()?;
    let last = partition.last()?;
    let step = match partition {
        [a, b, ..] => span_between(a.date, b.date),
        _ => Span::new(1, TimeUnit::Seconds),
    };
    Some((first.date, span::add(last.date, step.amount, step.unit)))
}

fn name_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    granularity: Granularity,
    format: Option<&str>,
) -> String {
    if let Some(pattern) = format {
        if let (Some(from), Some(to)) = (format_date(start, pattern), format_date(end, pattern)) {
            return match granularity {
                Granularity::Hour
                | Granularity::SixHour
                | Granularity::TwelveHour
                | Granularity::Week
                | Granularity::ThreeMonth => format!("{from} - {to}"),
                Granularity::Day | Granularity::Month | Granularity::Year => from,
            };
        }
    }
    match granularity {
        Granularity::Hour | Granularity::SixHour | Granularity::TwelveHour => {
            format!("{} - {}", clock_time(start), clock_time(end))
        }
        Granularity::Day => month_day_ordinal(start),
        Granularity::Week => {
            if start.month() == end.month() {
                format!("{} - {}", month_day_ordinal(start), ordinal(end.day()))
            } else {
                format!("{} - {}", month_day_ordinal(start), month_day_ordinal(end))
            }
        }
        Granularity::Month => start.format("%b").to_string(),
        Granularity::ThreeMonth => format!("{} - {}", start.format("%b"), end.format("%b")),
        Granularity::Year => start.format("%Y").to_string(),
    }
}

fn meridiem(date: NaiveDateTime) -> &'static str {
    if date.hour() < 12 {
        "AM"
    } else {
        "PM"
    }
}

fn ordinal(day: u32) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{day}{suffix}")
}
