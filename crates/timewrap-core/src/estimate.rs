// File: crates/timewrap-core/src/estimate.rs
// Summary: Sampling-interval and total-span inference for a timestamp series.

use chrono::NaiveDateTime;

use crate::span::{self, Span, TimeUnit};

pub const SECONDS_PER_HOUR: i64 = 60 * 60;
/// A day is at least 23 hours (DST-shortened days included).
pub const MIN_SECONDS_PER_DAY: i64 = 23 * SECONDS_PER_HOUR;
/// A month is at least 28 days.
pub const MIN_SECONDS_PER_MONTH: i64 = 28 * 24 * SECONDS_PER_HOUR;
/// A year is at least 365 days.
pub const MIN_SECONDS_PER_YEAR: i64 = 365 * 24 * SECONDS_PER_HOUR;

/// Gap between two timestamps, in the coarsest unit that keeps the amount in
/// a sane range: seconds below ~a day, then days, months, years. Coarsening
/// avoids "1.0000027 months" noise from slightly irregular sampling.
pub fn span_between(earlier: NaiveDateTime, later: NaiveDateTime) -> Span {
    let seconds = span::diff(later, earlier, TimeUnit::Seconds);
    if seconds < MIN_SECONDS_PER_DAY {
        return Span::new(seconds, TimeUnit::Seconds);
    }
    if seconds < MIN_SECONDS_PER_MONTH {
        return Span::new(span::diff(later, earlier, TimeUnit::Days), TimeUnit::Days);
    }
    if seconds < MIN_SECONDS_PER_YEAR {
        return Span::new(span::diff(later, earlier, TimeUnit::Months), TimeUnit::Months);
    }
    Span::new(span::diff(later, earlier, TimeUnit::Years), TimeUnit::Years)
}

/// Uniform step between points, inferred from the first two timestamps only.
/// Irregular interior spacing is deliberately not detected. Series with fewer
/// than two points fall back to a one-second span.
pub fn point_span(series: &[NaiveDateTime]) -> Span {
    match series {
        [first, second, ..] => span_between(*first, *second),
        _ => Span::new(1, TimeUnit::Seconds),
    }
}

/// Total covered duration in seconds: one point span past the last timestamp,
/// back to the first. The extra step accounts for the last point's own window.
pub fn total_span(series: &[NaiveDateTime]) -> i64 {
    let (Some(&first), Some(&last)) = (series.first(), series.last()) else {
        return 0;
    };
    let step = point_span(series);
    span::diff(span::add(last, step.amount, step.unit), first, TimeUnit::Seconds)
}
