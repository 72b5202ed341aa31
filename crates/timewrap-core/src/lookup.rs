// File: crates/timewrap-core/src/lookup.rs
// Summary: Resolve the duration represented by a single date, for drill-down ranges.

use chrono::NaiveDateTime;

use crate::span::{self, TimeUnit};

/// Duration in seconds represented by `date` within `date_series`.
///
/// An explicit span series is authoritative when it has a usable entry at the
/// matching index; zero and non-finite entries are treated as missing.
/// Otherwise the span is the gap to the next point, or to the previous point
/// when `date` is the last one. A date not present in the series, or a
/// single-point series with no span series, resolves to 1.
pub fn find_span_for_date(
    date: NaiveDateTime,
    date_series: &[NaiveDateTime],
    span_series: Option<&[f64]>,
) -> f64 {
    let Some(index) = date_series.iter().position(|&d| d == date) else {
        return 1.0;
    };
    if let Some(spans) = span_series {
        if let Some(&span) = spans.get(index) {
            if span != 0.0 && span.is_finite() {
                return span;
            }
        }
    }
    if let Some(&next) = date_series.get(index + 1) {
        return span::diff(next, date, TimeUnit::Seconds) as f64;
    }
    if index > 0 {
        return span::diff(date, date_series[index - 1], TimeUnit::Seconds) as f64;
    }
    1.0
}
