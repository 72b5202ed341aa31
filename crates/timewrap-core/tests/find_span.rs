// File: crates/timewrap-core/tests/find_span.rs
// Purpose: Span lookup contract: explicit spans, neighbor diffs, fallbacks.

mod common;

use common::{date, generate_time_series};
use timewrap_core::find_span_for_date;
use timewrap_core::span::TimeUnit;

fn fixture() -> (Vec<chrono::NaiveDateTime>, Vec<f64>) {
    let mut series = generate_time_series("1981-08-18 00:00:00", 12, 1, TimeUnit::Hours);
    series.push(date("1981-08-18 11:30:00"));
    let spans = (0..series.len()).map(|i| (i + 10) as f64).collect();
    (series, spans)
}

#[test]
fn uses_the_span_series_when_possible() {
    let (series, spans) = fixture();
    let span = find_span_for_date(date("1981-08-18 03:00:00"), &series, Some(&spans[..]));
    assert_eq!(span, 13.0);
}

#[test]
fn diffs_to_the_next_date_without_a_span_series() {
    let (series, _) = fixture();
    let span = find_span_for_date(date("1981-08-18 03:00:00"), &series, None);
    assert_eq!(span, 3600.0);
}

#[test]
fn diffs_to_the_previous_date_for_the_last_point() {
    let (series, _) = fixture();
    let span = find_span_for_date(date("1981-08-18 11:30:00"), &series, None);
    assert_eq!(span, 1800.0);
}

#[test]
fn handles_a_single_point_with_a_span_series() {
    let (series, spans) = fixture();
    let span = find_span_for_date(date("1981-08-18 00:00:00"), &series[..1], Some(&spans[..1]));
    assert_eq!(span, 10.0);
}

#[test]
fn returns_one_for_a_single_point_without_a_span_series() {
    let (series, _) = fixture();
    let span = find_span_for_date(date("1981-08-18 00:00:00"), &series[..1], None);
    assert_eq!(span, 1.0);
}

#[test]
fn returns_one_when_the_date_is_not_in_the_series() {
    let (series, _) = fixture();
    let span = find_span_for_date(date("1981-08-18 09:30:00"), &series, None);
    assert_eq!(span, 1.0);
}

#[test]
fn a_zero_span_entry_is_treated_as_missing() {
    let (series, mut spans) = fixture();
    spans[3] = 0.0;
    let span = find_span_for_date(date("1981-08-18 03:00:00"), &series, Some(&spans[..]));
    assert_eq!(span, 3600.0);
}
