// File: crates/timewrap-core/tests/estimate.rs
// Purpose: Span inference, granularity selection thresholds, and fill steps.

mod common;

use common::{date, generate_time_series};
use timewrap_core::span::TimeUnit;
use timewrap_core::{point_span, span_between, total_span, Granularity, Span};

#[test]
fn point_span_one_minute_apart() {
    let series = generate_time_series("1981-08-18 00:00:00", 2, 60, TimeUnit::Seconds);
    assert_eq!(point_span(&series), Span::new(60, TimeUnit::Seconds));
}

#[test]
fn point_span_one_hour_apart_spanning_a_day_boundary() {
    let series = generate_time_series("1981-08-18 23:30:00", 2, 3600, TimeUnit::Seconds);
    assert_eq!(point_span(&series), Span::new(3600, TimeUnit::Seconds));
}

#[test]
fn point_span_coarsens_to_days_months_years() {
    assert_eq!(
        span_between(date("1981-08-18 00:00:00"), date("1981-08-20 00:00:00")),
        Span::new(2, TimeUnit::Days)
    );
    assert_eq!(
        span_between(date("1981-09-01 00:00:00"), date("1982-01-01 00:00:00")),
        Span::new(4, TimeUnit::Months)
    );
    assert_eq!(
        span_between(date("1981-09-01 00:00:00"), date("1983-09-01 00:00:00")),
        Span::new(2, TimeUnit::Years)
    );
}

#[test]
fn point_span_falls_back_below_two_points() {
    assert_eq!(point_span(&[]), Span::new(1, TimeUnit::Seconds));
    assert_eq!(
        point_span(&[date("1981-08-18 00:00:00")]),
        Span::new(1, TimeUnit::Seconds)
    );
}

#[test]
fn total_span_five_points_one_minute_apart() {
    let series = generate_time_series("1981-08-18 00:00:00", 5, 60, TimeUnit::Seconds);
    assert_eq!(total_span(&series), 5 * 60);
}

#[test]
fn total_span_thirty_points_spanning_two_day_boundaries() {
    let series = generate_time_series("1981-08-18 23:30:00", 30, 3600, TimeUnit::Seconds);
    assert_eq!(total_span(&series), 30 * 3600);
}

#[test]
fn total_span_of_empty_series_is_zero() {
    assert_eq!(total_span(&[]), 0);
}

#[test]
fn granularity_thresholds_at_each_edge() {
    let day = 23 * 3600;
    assert_eq!(Granularity::from_total_span(day - 1), Granularity::Hour);
    assert_eq!(Granularity::from_total_span(day), Granularity::SixHour);
    assert_eq!(Granularity::from_total_span(2 * day - 1), Granularity::SixHour);
    assert_eq!(Granularity::from_total_span(2 * day), Granularity::TwelveHour);
    assert_eq!(Granularity::from_total_span(4 * day - 1), Granularity::TwelveHour);
    assert_eq!(Granularity::from_total_span(4 * day), Granularity::Day);
    assert_eq!(Granularity::from_total_span(14 * day - 1), Granularity::Day);
    assert_eq!(Granularity::from_total_span(14 * day), Granularity::Week);
    assert_eq!(Granularity::from_total_span(60 * day - 1), Granularity::Week);
    assert_eq!(Granularity::from_total_span(60 * day), Granularity::Month);
    assert_eq!(Granularity::from_total_span(365 * day - 1), Granularity::Month);
    assert_eq!(Granularity::from_total_span(365 * day), Granularity::ThreeMonth);
    assert_eq!(Granularity::from_total_span(730 * day - 1), Granularity::ThreeMonth);
    assert_eq!(Granularity::from_total_span(730 * day), Granularity::Year);
}

#[test]
fn fill_step_follows_the_sampling_rate_only_when_it_divides_an_hour() {
    let g = Granularity::Hour;
    assert_eq!(
        g.fill_step(Span::new(15 * 60, TimeUnit::Seconds)),
        Span::new(15, TimeUnit::Minutes)
    );
    assert_eq!(
        g.fill_step(Span::new(7 * 60, TimeUnit::Seconds)),
        Span::new(1, TimeUnit::Minutes)
    );
    assert_eq!(
        g.fill_step(Span::new(60, TimeUnit::Seconds)),
        Span::new(1, TimeUnit::Minutes)
    );
    // sub-minute sampling has no whole-minute component
    assert_eq!(
        g.fill_step(Span::new(30, TimeUnit::Seconds)),
        Span::new(1, TimeUnit::Minutes)
    );
}

#[test]
fn fill_step_is_fixed_for_coarser_granularities() {
    let hourly = Span::new(3600, TimeUnit::Seconds);
    assert_eq!(
        Granularity::SixHour.fill_step(hourly),
        Span::new(1, TimeUnit::Hours)
    );
    assert_eq!(
        Granularity::TwelveHour.fill_step(hourly),
        Span::new(1, TimeUnit::Hours)
    );
    assert_eq!(
        Granularity::Day.fill_step(hourly),
        Span::new(1, TimeUnit::Hours)
    );
    assert_eq!(
        Granularity::Week.fill_step(Span::new(1, TimeUnit::Days)),
        Span::new(1, TimeUnit::Days)
    );
    assert_eq!(
        Granularity::Month.fill_step(Span::new(7, TimeUnit::Days)),
        Span::new(1, TimeUnit::Days)
    );
    assert_eq!(
        Granularity::ThreeMonth.fill_step(Span::new(1, TimeUnit::Months)),
        Span::new(1, TimeUnit::Months)
    );
    assert_eq!(
        Granularity::Year.fill_step(Span::new(4, TimeUnit::Months)),
        Span::new(1, TimeUnit::Months)
    );
}
