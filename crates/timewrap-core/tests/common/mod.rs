// File: crates/timewrap-core/tests/common/mod.rs
// Purpose: Shared fixture helpers for the engine integration tests.
#![allow(dead_code)]

use chrono::NaiveDateTime;
use timewrap_core::span::{self, TimeUnit};
use timewrap_core::{decorate_with_data, fill_gaps, partition, point_span, DataPoint, Granularity};

pub fn date(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").expect("valid test date")
}

/// `length` timestamps starting at `start`, each `step` of `unit` apart.
pub fn generate_time_series(
    start: &str,
    length: usize,
    step: i64,
    unit: TimeUnit,
) -> Vec<NaiveDateTime> {
    let first = date(start);
    (0..length as i64)
        .map(|i| span::add(first, step * i, unit))
        .collect()
}

pub fn date_strings(partitions: &[Vec<NaiveDateTime>]) -> Vec<Vec<String>> {
    partitions
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .collect()
        })
        .collect()
}

/// Partition, decorate with 0..n values under the field name "count", and
/// gap-fill, mirroring the pipeline's stages up to labeling.
pub fn null_filled_partitions(
    series: &[NaiveDateTime],
    granularity: Granularity,
) -> Vec<Vec<DataPoint>> {
    let values = (0..series.len()).map(|i| i as f64).collect::<Vec<_>>();
    let partitions = partition(series, granularity);
    let partitions = decorate_with_data(partitions, &values, "count");
    fill_gaps(partitions, granularity, point_span(series))
}

/// Dates of real points, `None` at gap positions.
pub fn gap_pattern(partitions: &[Vec<DataPoint>]) -> Vec<Vec<Option<String>>> {
    partitions
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|point| {
                    if point.is_gap() {
                        None
                    } else {
                        Some(point.date.format("%Y-%m-%d %H:%M:%S").to_string())
                    }
                })
                .collect()
        })
        .collect()
}
